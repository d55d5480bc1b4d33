use std::env;
use std::io::{self, Write};
use std::process;

use anyhow::{bail, Context, Result};
use log::{info, warn};
use ml_core::{load_dataset, AppConfig, DatasetSummary, Predictor, RegressionLine};

const USAGE: &str = "usage: marks-prediction [HOURS] [--line]

  HOURS    study hours to predict marks for (bounded to the input range)
  --line   print the regression line as x,y pairs

environment:
  MARKS_DATASET  dataset path (default: Dataset.csv)
  MARKS_MODEL    model path (default: Students_marks_prediction_model.json)
  RUST_LOG       log level";

#[derive(Debug, Default, PartialEq)]
struct Args {
    hours: Option<f64>,
    line: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();

    for arg in args {
        match arg.as_str() {
            "--line" => parsed.line = true,
            "-h" | "--help" => parsed.help = true,
            other if parsed.hours.is_none() => {
                let hours = other
                    .parse::<f64>()
                    .ok()
                    .filter(|h| h.is_finite())
                    .with_context(|| format!("'{other}' is not a number of study hours"))?;
                parsed.hours = Some(hours);
            }
            other => bail!("unexpected argument '{other}'"),
        }
    }

    Ok(parsed)
}

fn run(args: &Args, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let dataset = load_dataset(&config.dataset_path).context("loading dataset")?;
    let summary = DatasetSummary::of(&dataset);
    info!("dataset summary: {summary}");
    writeln!(out, "{summary}")?;

    let predictor = Predictor::load(&config.model_path).context("loading model")?;

    if let Some(requested) = args.hours {
        let hours = config.clamp_hours(requested);
        if hours != requested {
            warn!(
                "study hours {requested} outside [{}, {}], using {hours}",
                config.hours_min, config.hours_max
            );
        }
        writeln!(out, "Predicted Marks: {:.2}", predictor.predict_one(hours))?;
    }

    if args.line {
        match RegressionLine::sweep(&dataset, &predictor, config.line_points) {
            Some(line) => {
                for (x, y) in line.points() {
                    writeln!(out, "{x},{y}")?;
                }
            }
            None => warn!("dataset is empty, there is no regression line to draw"),
        }
    }

    Ok(())
}

/// Runs the CLI and maps the outcome to a process exit status.
fn execute(args: &Args, config: &AppConfig, out: &mut impl Write, err: &mut impl Write) -> i32 {
    match run(args, config, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "error: {e:#}");
            1
        }
    }
}

fn main() {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            process::exit(2);
        }
    };

    if args.help {
        println!("{USAGE}");
        return;
    }

    let config = AppConfig::from_env();
    let code = execute(&args, &config, &mut io::stdout().lock(), &mut io::stderr());
    process::exit(code);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_hours_and_line_flag() {
        let parsed = args(&["--line", "7.5"]).unwrap();
        assert_eq!(
            parsed,
            Args {
                hours: Some(7.5),
                line: true,
                help: false
            }
        );
    }

    #[test]
    fn no_arguments_is_summary_only() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn rejects_non_numeric_and_extra_arguments() {
        assert!(args(&["lots"]).is_err());
        assert!(args(&["NaN"]).is_err());
        assert!(args(&["1", "2"]).is_err());
    }

    /// Dataset with hours 1..=4 and a model `marks = coef * hours + intercept`.
    fn fixture(coef: f64, intercept: f64) -> (TempDir, AppConfig) {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            dataset_path: dir.path().join("Dataset.csv"),
            model_path: dir.path().join("model.json"),
            ..AppConfig::default()
        };
        fs::write(
            &config.dataset_path,
            "Study Hours,Student Marks\n1,10\n2,20\n3,30\n4,40\n",
        )
        .unwrap();
        fs::write(
            &config.model_path,
            format!(r#"{{"kind":"linear_regression","coef":{coef},"intercept":{intercept}}}"#),
        )
        .unwrap();
        (dir, config)
    }

    fn output(list: &[&str], config: &AppConfig) -> (i32, String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = execute(&args(list).unwrap(), config, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn prints_summary_and_prediction() {
        let (_dir, config) = fixture(10.0, -5.0);
        let (code, out, err) = output(&["4.5"], &config);

        assert_eq!(code, 0);
        assert!(err.is_empty());
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("rows: 4"));
        assert_eq!(lines[1], "Predicted Marks: 40.00");
    }

    #[test]
    fn hours_are_bounded_to_input_range() {
        let (_dir, config) = fixture(1.0, 0.0);

        let (_, out, _) = output(&["30"], &config);
        assert!(out.contains("Predicted Marks: 24.00"));

        let (_, out, _) = output(&["-3"], &config);
        assert!(out.contains("Predicted Marks: 0.00"));
    }

    #[test]
    fn line_flag_prints_xy_pairs() {
        let (_dir, config) = fixture(10.0, -5.0);
        let (code, out, _) = output(&["--line"], &config);

        assert_eq!(code, 0);
        let pairs = out
            .lines()
            .skip(1)
            .map(|l| {
                let (x, y) = l.split_once(',').unwrap();
                (x.parse::<f64>().unwrap(), y.parse::<f64>().unwrap())
            })
            .collect::<Vec<_>>();
        assert_eq!(pairs.len(), 100);
        assert_eq!(pairs[0], (1.0, 5.0));
        assert_eq!(pairs[99], (4.0, 35.0));
        assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn missing_files_exit_non_zero() {
        let (_dir, config) = fixture(1.0, 0.0);

        fs::remove_file(&config.model_path).unwrap();
        let (code, out, err) = output(&["5"], &config);
        assert_eq!(code, 1);
        assert!(err.starts_with("error: loading model"));
        assert!(err.contains("not found"));
        assert!(!out.contains("Predicted Marks"));

        fs::remove_file(&config.dataset_path).unwrap();
        let (code, out, err) = output(&[], &config);
        assert_eq!(code, 1);
        assert!(err.starts_with("error: loading dataset"));
        assert!(out.is_empty());
    }
}
