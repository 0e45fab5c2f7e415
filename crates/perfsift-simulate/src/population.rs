//! Historical population input

use perfsift_core::{Error, Result};
use std::io::BufRead;
use tracing::info;

/// Read a historical observation population: one integer per line. Any
/// line that does not parse as an integer is a fatal input error naming
/// the offending line.
pub fn read_population<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut population = Vec::new();
    for (num, line) in reader.lines().enumerate() {
        let line = line?;
        let token = line.trim();
        let value = token.parse::<i64>().map_err(|_| {
            Error::InvalidInput(format!(
                "line {}: {token:?} is not an integer observation",
                num + 1
            ))
        })?;
        population.push(value);
    }
    info!(observations = population.len(), "loaded source population");
    Ok(population)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_one_observation_per_line() {
        let input = "431\n425\n 440 \n433\n";
        assert_eq!(
            read_population(input.as_bytes()).unwrap(),
            vec![431, 425, 440, 433]
        );
    }

    #[test]
    fn test_empty_input_is_an_empty_population() {
        assert!(read_population("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_non_integer_line_is_fatal_and_named() {
        let err = read_population("431\n42.5\n440\n".as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 2"));
        assert!(message.contains("42.5"));

        assert!(read_population("431\n\n440\n".as_bytes()).is_err());
    }
}
