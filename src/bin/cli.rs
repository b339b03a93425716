//! This is the command line host. It reads the five bedtime inputs, predicts
//! the deep sleep ratio and prints the coaching interventions. In watch mode
//! it keeps reading 'name=value' updates from stdin and reassesses after each
//! one.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{Arg, ArgAction, ArgMatches, Command};
use sleepcoach::{assess, Feature, FeatureVector, Predictor};

use std::io::{self, BufRead};
use std::time::Instant;

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::debug!(
                "Assessment completed in {} microseconds",
                duration.as_micros()
            );
        }
    }
}

/// Parse 'text' as a value of 'feature', and check it against the range the
/// host offers.
fn parse_input(feature: Feature, text: &str) -> Result<f64, String> {
    let val: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text.trim()))?;
    let range = feature.range();
    if !range.contains(val) {
        return Err(format!(
            "{} must be within {}..={} in steps of {}",
            feature, range.min, range.max, range.step
        ));
    }
    Ok(val)
}

fn feature_arg(feature: Feature) -> Arg {
    Arg::new(feature.name())
        .long(feature.name())
        .value_name("VALUE")
        .help(feature.description())
        .num_args(1)
        .value_parser(move |s: &str| parse_input(feature, s))
}

fn inputs_from_matches(matches: &ArgMatches) -> FeatureVector {
    let mut features = FeatureVector::default();
    for feature in Feature::ALL {
        if let Some(val) = matches.get_one::<f64>(feature.name()) {
            features.set(feature, *val);
        }
    }
    features
}

fn report(predictor: &Predictor, features: &FeatureVector) {
    let _timer = Timer::new();
    print!("{}", assess(predictor, features));
}

/// Apply one 'name=value' update to 'features'.
fn apply_update(
    features: &mut FeatureVector,
    line: &str,
) -> Result<(), String> {
    let (name, value) = line
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", line))?;
    let feature = Feature::from_name(name.trim())
        .ok_or_else(|| format!("unknown input '{}'", name.trim()))?;
    features.set(feature, parse_input(feature, value)?);
    Ok(())
}

fn watch(predictor: &Predictor, mut features: FeatureVector) -> io::Result<()> {
    report(predictor, &features);
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "quit" {
            break;
        }
        match apply_update(&mut features, line) {
            Ok(()) => {
                println!();
                report(predictor, &features);
            }
            Err(msg) => log::warn!("Ignoring update: {}", msg),
        }
    }
    Ok(())
}

fn main() {
    let mut command = Command::new("sleepcoach").version("1.x").arg(
        Arg::new("watch")
            .short('w')
            .long("watch")
            .help("Read name=value updates from stdin and reassess after each")
            .action(ArgAction::SetTrue),
    );
    for feature in Feature::ALL {
        command = command.arg(feature_arg(feature));
    }
    let matches = command.get_matches();

    env_logger::builder().format_timestamp(None).init();

    let features = inputs_from_matches(&matches);

    // Without a model there is nothing meaningful to show.
    let predictor = match Predictor::new() {
        Ok(predictor) => predictor,
        Err(err) => {
            log::error!("Could not train the sleep model: {}", err);
            std::process::exit(1);
        }
    };

    if matches.get_flag("watch") {
        if let Err(err) = watch(&predictor, features) {
            log::error!("Failed to read updates: {}", err);
            std::process::exit(1);
        }
        return;
    }

    report(&predictor, &features);
}
