use crate::errors::ParseError;
use crate::grid::Position;

/// Parses one obstacle per line in `"<x>,<y>"` form.
///
/// Blank lines are skipped. Any other line that is not exactly two
/// non-negative integers separated by a comma fails the whole parse, since
/// dropping it would shift the time order of every later obstacle.
pub fn parse_obstacles(text: &str) -> Result<Vec<Position>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            line.trim()
                .parse::<Position>()
                .map_err(|_| ParseError::MalformedLine {
                    line: ind + 1,
                    text: line.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_line_order_and_duplicates() {
        let obstacles = parse_obstacles("5,4\n4,2\n5,4\n").unwrap();
        assert_eq!(
            obstacles,
            vec![Position::new(5, 4), Position::new(4, 2), Position::new(5, 4)]
        );
    }

    #[test]
    fn skips_blank_lines() {
        let obstacles = parse_obstacles("\n1,2\r\n\n   \n3,4").unwrap();
        assert_eq!(obstacles, vec![Position::new(1, 2), Position::new(3, 4)]);
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert!(parse_obstacles("").unwrap().is_empty());
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let err = parse_obstacles("1,2\n\n3;4\n5,6").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: 3,
                text: "3;4".to_string(),
            }
        );
    }

    #[test]
    fn negative_coordinates_are_malformed() {
        assert!(matches!(
            parse_obstacles("-1,0"),
            Err(ParseError::MalformedLine { line: 1, .. })
        ));
    }
}
