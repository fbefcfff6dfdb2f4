//! Collect a hodograph configuration from an operator.
//!
//! The prompter is generic over its input and output so it works the same on a terminal as it
//! does on an in memory buffer.
use crate::{
    config::{parse_date, parse_time, HodographConfig, LevelConfig},
    error::ConfigError,
    sounding::{validate_direction, validate_speed, STANDARD_LEVELS},
};
use metfor::{HectoPascal, Knots, Quantity};
use std::io::{BufRead, Write};
use tracing::warn;

const SEPARATOR: &str = "---------------------";

/// Asks questions on `output` and reads the answers from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter.
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Give back the input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask for the name, date, time, and winds of a hodograph.
    ///
    /// Invalid answers are reported and asked for again. Analysis settings are left at their
    /// defaults.
    pub fn collect_config(&mut self) -> Result<HodographConfig, ConfigError> {
        let name = self.ask("What do you want to name your hodograph?\n", |s| {
            Ok(s.to_owned())
        })?;
        writeln!(self.output, "{}", SEPARATOR)?;

        let date = self.ask(
            "What date is this hodograph for (YYYY-MM-DD, blank for none)?\n",
            |s| optional_answer(s, parse_date),
        )?;
        writeln!(self.output, "{}", SEPARATOR)?;

        let time = self.ask(
            "What timestamp is this hodograph for (must be in UTC, HHMM)?\n",
            |s| optional_answer(s, parse_time),
        )?;
        writeln!(self.output, "{}", SEPARATOR)?;

        let levels = self.collect_levels()?;

        Ok(HodographConfig {
            name,
            date,
            time,
            levels,
            ..HodographConfig::default()
        })
    }

    /// Ask for the wind speed and direction at each of the standard levels.
    pub fn collect_levels(&mut self) -> Result<Vec<LevelConfig>, ConfigError> {
        writeln!(
            self.output,
            "Time to enter the sounding data for your hodograph!"
        )?;
        writeln!(
            self.output,
            "Tell us what the wind speed and direction is for the following barometric pressure \
             levels in the atmosphere:"
        )?;

        let mut levels = Vec::with_capacity(STANDARD_LEVELS.len());
        for &pressure in STANDARD_LEVELS.iter() {
            writeln!(self.output, "{} hPa:", pressure.unpack())?;
            levels.push(self.collect_level(pressure)?);
            writeln!(self.output, "{}", SEPARATOR)?;
        }

        Ok(levels)
    }

    fn collect_level(&mut self, pressure: HectoPascal) -> Result<LevelConfig, ConfigError> {
        let speed_kt = self.ask("Wind Speed (in kts): ", |s| {
            let speed = validate_speed(pressure, Knots(parse_number(s)?))?;
            Ok(speed.unpack())
        })?;

        let direction_deg = self.ask("Wind Direction (0-360°): ", |s| {
            Ok(validate_direction(pressure, parse_number(s)?)?)
        })?;

        Ok(LevelConfig {
            pressure_hpa: pressure.unpack(),
            speed_kt,
            direction_deg,
        })
    }

    fn ask<T, F>(&mut self, question: &str, parse: F) -> Result<T, ConfigError>
    where
        F: Fn(&str) -> Result<T, ConfigError>,
    {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            let answer = self.read_line()?;
            match parse(&answer) {
                Ok(val) => return Ok(val),
                Err(err) => {
                    warn!(%err, "rejected operator input");
                    writeln!(self.output, "{}, please try again.", err)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String, ConfigError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(ConfigError::UnexpectedEof);
        }

        Ok(buf.trim().to_owned())
    }
}

fn parse_number(val: &str) -> Result<f64, ConfigError> {
    val.parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber(val.to_owned()))
}

// Blank answers are allowed, anything else must pass `check`.
fn optional_answer<T, F>(val: &str, check: F) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<T, ConfigError>,
{
    if val.is_empty() {
        Ok(None)
    } else {
        check(val).map(|_| Some(val.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<HodographConfig, ConfigError>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = prompter.collect_config();
        let (_, output) = prompter.into_inner();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_collect_config() {
        let input = "Test storm\n2024-05-20\n1800\n\
                     10\n0\n15\n45\n20\n90\n25\n135\n30\n180\n";
        let (config, output) = run(input);
        let config = config.unwrap();

        assert_eq!(config.name, "Test storm");
        assert_eq!(config.date.as_deref(), Some("2024-05-20"));
        assert_eq!(config.time.as_deref(), Some("1800"));

        let winds: Vec<(f64, f64, f64)> = config
            .levels
            .iter()
            .map(|l| (l.pressure_hpa, l.speed_kt, l.direction_deg))
            .collect();
        assert_eq!(
            winds,
            vec![
                (1000.0, 10.0, 0.0),
                (850.0, 15.0, 45.0),
                (600.0, 20.0, 90.0),
                (350.0, 25.0, 135.0),
                (150.0, 30.0, 180.0),
            ]
        );

        assert!(output.contains("1000 hPa:"));
        assert!(output.contains("150 hPa:"));
        assert_eq!(output.matches("Wind Speed (in kts): ").count(), 5);

        assert!(config.to_sounding().is_ok());
    }

    #[test]
    fn test_reprompt_on_bad_values() {
        // Bad date, bad speed, out of range direction, then good values.
        let input = "\nyesterday\n\n\n\
                     fast\n-3\n10\n400\n360\n15\n45\n20\n90\n25\n135\n30\n180\n";
        let (config, output) = run(input);
        let config = config.unwrap();

        assert!(config.date.is_none());
        assert!(config.time.is_none());
        assert_eq!(config.levels[0].speed_kt, 10.0);
        assert_eq!(config.levels[0].direction_deg, 0.0);

        assert!(output.contains("invalid date 'yesterday'"));
        assert!(output.contains("'fast' is not a number"));
        assert!(output.contains("invalid wind speed -3 at 1000 hPa"));
        assert!(output.contains("invalid wind direction 400 at 1000 hPa"));
        assert_eq!(output.matches("Wind Speed (in kts): ").count(), 7);
    }

    #[test]
    fn test_end_of_input() {
        let (result, _) = run("Name\n2024-05-20\n1800\n10\n");
        assert!(matches!(result, Err(ConfigError::UnexpectedEof)));
    }
}
