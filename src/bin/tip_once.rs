use clap::Parser;
use jettip::core::Renderer;
use jettip::domain::model::{TipFraction, MAX_SPLIT, MIN_SPLIT};
use jettip::utils::logger;
use jettip::{FormState, JsonRenderer, MoneyFormat, TextRenderer, TipError};

#[derive(Parser)]
#[command(name = "tip_once")]
#[command(about = "Compute one bill split and print it")]
struct Args {
    /// Bill total, e.g. 84.20
    #[arg(short, long)]
    bill: String,

    /// Tip percentage
    #[arg(short, long, default_value = "15", value_parser = clap::value_parser!(u32).range(0..=100))]
    tip: u32,

    /// Number of people sharing the bill
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(MIN_SPLIT as i64..=MAX_SPLIT as i64))]
    split: u32,

    #[arg(long, default_value = "$")]
    currency: String,

    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, None);

    if let Err(e) = run(&args) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code().max(1));
    }
}

fn run(args: &Args) -> Result<(), TipError> {
    let mut form = FormState::new();
    form.set_bill_input(&args.bill)?;
    form.set_tip_fraction(TipFraction::new(f64::from(args.tip) / 100.0)?);
    for _ in MIN_SPLIT..args.split {
        form.increment_split();
    }

    let view = form.view();
    if args.json {
        JsonRenderer::new(std::io::stdout()).render(&view)
    } else {
        let money = MoneyFormat {
            currency_symbol: args.currency.clone(),
            ..MoneyFormat::default()
        };
        TextRenderer::new(std::io::stdout(), money).render(&view)
    }
}
