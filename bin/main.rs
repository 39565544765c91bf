//! Weibull
//!
//! Print the summary statistics of a Weibull distribution and evaluate it at
//! the given points.

use std::process;
use std::str::FromStr;

use weibull_maths::Weibull;

const USAGE: &str = "usage: weibull <shape> <scale> [x ...]";

struct Args {
    dist: Weibull,
    points: Vec<f64>,
}

fn parse_f64(arg: &str, what: &str) -> Result<f64, String> {
    f64::from_str(arg.trim()).map_err(|_| format!("invalid {}: `{}`", what, arg))
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    if args.len() < 2 {
        return Err("expected a shape and a scale".to_owned());
    }
    let shape = parse_f64(&args[0], "shape")?;
    let scale = parse_f64(&args[1], "scale")?;
    let dist = Weibull::try_new(shape, scale).map_err(|err| err.to_string())?;
    let points = args[2..]
        .iter()
        .map(|a| parse_f64(a, "point"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Args { dist, points })
}

fn print_summary(w: &Weibull) {
    println!("{}", w);
    println!("  mean        {}", w.mean());
    println!("  variance    {}", w.variance());
    println!("  std_dev     {}", w.std_dev());
    println!("  skewness    {}", w.skewness());
    println!("  ex_kurtosis {}", w.ex_kurtosis());
    println!("  entropy     {}", w.entropy());
    println!("  median      {}", w.median());
    println!("  mode        {}", w.mode());
}

fn print_point(w: &Weibull, x: f64) {
    println!(
        "x={}: pdf={} log_pdf={} cdf={} survival={} dlogprob_dx={}",
        x,
        w.prob(x),
        w.log_prob(x),
        w.cdf(x),
        w.survival(x),
        w.dlog_prob_dx(x)
    );
}

fn main() {
    weibull_maths::setup_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            log::error!("{}", msg);
            eprintln!("{}\n{}", msg, USAGE);
            process::exit(1);
        }
    };
    log::debug!("evaluating {} at {} points", parsed.dist, parsed.points.len());

    print_summary(&parsed.dist);
    for x in parsed.points {
        print_point(&parsed.dist, x);
    }
}
