use chumsky::prelude::*;
use miette::*;

use crate::config::Configuration;

/// Splits the input into rows of integers, one per non-blank line.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<i64>>, extra::Err<Rich<'a, char>>> {
    // Whitespace that stays on the current line
    let hspace = any().filter(|c: &char| *c == ' ' || *c == '\t').repeated();

    // Digits are taken greedily, so leading zeros stay inside one token.
    let int = text::digits(10).to_slice().try_map(|digits: &str, span| {
        digits
            .parse::<i64>()
            .map_err(|e| Rich::custom(span, format!("{digits}: {e}")))
    });

    let line = hspace
        .clone()
        .ignore_then(int.then_ignore(hspace).repeated().collect::<Vec<i64>>());

    line.separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|rows| rows.into_iter().filter(|r| !r.is_empty()).collect())
}

/// Reads `R C`, then `N`, then `N` lines of `x1 y1 x2 y2`.
pub fn parse_configuration(input: &str) -> Result<Configuration> {
    let table = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let (header, rest) = table
        .split_first()
        .ok_or_else(|| miette!("Input is empty, expected `R C` on the first line"))?;
    let &[rows, cols] = header.as_slice() else {
        bail!("Expected `R C` on the first line, got {} values", header.len());
    };

    let (count, lines) = rest
        .split_first()
        .ok_or_else(|| miette!("Missing the segment count `N`"))?;
    let &[n] = count.as_slice() else {
        bail!("Expected a single segment count, got {} values", count.len());
    };
    let n = usize::try_from(n).map_err(|_| miette!("Segment count must be non-negative, got {n}"))?;
    ensure!(
        lines.len() == n,
        "Expected {} segments, found {}",
        n,
        lines.len()
    );

    let mut x1 = Vec::with_capacity(n);
    let mut y1 = Vec::with_capacity(n);
    let mut x2 = Vec::with_capacity(n);
    let mut y2 = Vec::with_capacity(n);
    for (i, line) in lines.iter().enumerate() {
        let &[sx, sy, ex, ey] = line.as_slice() else {
            bail!(
                "Segment {} has {} values, expected `x1 y1 x2 y2`",
                i + 1,
                line.len()
            );
        };
        x1.push(sx);
        y1.push(sy);
        x2.push(ex);
        y2.push(ey);
    }

    Configuration::new(rows, cols, x1, y1, x2, y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Segment;
    use rstest::rstest;

    #[test]
    fn parses_sample() -> Result<()> {
        let input = "3 5
3
1 0 1 2
0 1 2 1
2 3 2 5";
        let cfg = parse_configuration(input)?;
        assert_eq!((cfg.rows(), cfg.cols()), (3, 5));
        assert_eq!(
            cfg.segments().collect::<Vec<_>>(),
            vec![
                Segment::new(1, 0, 1, 2),
                Segment::new(0, 1, 2, 1),
                Segment::new(2, 3, 2, 5),
            ]
        );
        Ok(())
    }

    #[test]
    fn tolerates_crlf_padding_and_blank_lines() -> Result<()> {
        let input = "  4 4 \r\n\r\n1\r\n\t1 0 1 2  \r\n\r\n";
        let cfg = parse_configuration(input)?;
        assert_eq!(cfg.len(), 1);
        assert_eq!(cfg.area(), 16);
        Ok(())
    }

    #[test]
    fn zero_segments() -> Result<()> {
        let cfg = parse_configuration("1000000000 1000000000\n0\n")?;
        assert!(cfg.is_empty());
        Ok(())
    }

    #[rstest]
    #[case::empty("", "empty")]
    #[case::short_header("3\n0\n", "first line")]
    #[case::missing_count("3 5\n", "segment count")]
    #[case::count_mismatch("3 5\n2\n1 0 1 2\n", "Expected 2 segments")]
    #[case::short_segment("3 5\n1\n1 0 1\n", "expected `x1 y1 x2 y2`")]
    #[case::not_a_number("3 5\n1\n1 0 x 2\n", "Parse failed")]
    #[case::negative("3 5\n1\n1 0 -1 2\n", "Parse failed")]
    #[case::overflow("99999999999999999999 5\n0\n", "Parse failed")]
    #[case::diagonal("3 5\n1\n0 0 1 1\n", "not axis-aligned")]
    fn rejects_malformed_input(#[case] input: &str, #[case] message: &str) {
        let err = parse_configuration(input).unwrap_err();
        assert!(err.to_string().contains(message), "{err}");
    }
}
