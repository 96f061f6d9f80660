use basescape::args::AppArgs;
use basescape::costs::MonthlyCosts;
use basescape::progress::TechProgress;
use basescape::store;
use basescape::types::AppResult;
use basescape::ui::constants::UiStyle;
use basescape::ui::TopicSelectPanel;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

fn main() -> AppResult<()> {
    let logfile = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build("basescape.log")?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;

    let args = AppArgs::parse();

    let rules = store::load_ruleset(&args.ruleset)?;
    let progress = match &args.progress {
        Some(path) => store::load_progress(path)?,
        None => TechProgress::default(),
    };
    log::info!(
        "loaded ruleset with {} research, {} manufacturing, {} facility, {} item, {} craft topics",
        rules.research.len(),
        rules.manufacturing.len(),
        rules.facilities.len(),
        rules.items.len(),
        rules.crafts.len()
    );

    let mut panel = TopicSelectPanel::new(&rules, &progress);
    panel.set_query(&args.query, &rules, &progress);

    let topics = panel.topics();
    for (index, entry) in topics.entries.iter().enumerate() {
        let marker = if entry.style == UiStyle::SECONDARY {
            " (undiscovered)"
        } else {
            ""
        };
        println!("{index:>4}  {}{marker}", entry.label);
    }

    if let Some(index) = args.select {
        match panel.select(index) {
            Some((topic, category)) => println!("selected: {topic} ({category})"),
            None => println!("selected: nothing (row {index} does not exist)"),
        }
    }

    if let Some(path) = &args.ledger {
        let ledger = store::load_ledger(path)?;
        let report = MonthlyCosts::tally(&ledger);
        println!("\nMonthly costs");
        print!("{report}");
    }

    Ok(())
}
