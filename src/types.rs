// A Topic is any entry of the tech tree: a research project, a manufacturing
// project, a base facility, an item or a craft type. Topics are identified by
// the opaque string keys the mod data uses.
pub type TopicId = String;

pub type AppResult<T> = Result<T, anyhow::Error>;
