use crate::{Coord, InvalidInputError};

/// Returns live cells of the parsed RLE pattern, top-left corner at `(0, 0)`.
pub fn parse_rle(data: &str) -> Result<Vec<Coord>, InvalidInputError> {
    let err = |msg: String| InvalidInputError::Rle(msg);

    let mut lines = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    // first line must start with 'x'; parsing sizes
    let header = lines.next().ok_or_else(|| err("missing header".into()))?;
    if !header.starts_with('x') {
        return Err(err(format!("expected `x = .., y = ..`, got `{header}`")));
    }
    let (width, height) = parse_header(header).ok_or_else(|| err(format!("bad header `{header}`")))?;

    let mut cells = vec![];
    let (mut x, mut y, mut cnt) = (0i64, 0i64, None::<i64>);
    'body: for line in lines {
        for ch in line.chars() {
            match ch {
                '0'..='9' => {
                    let digit = i64::from(ch as u8 - b'0');
                    cnt = Some(
                        cnt.unwrap_or(0)
                            .checked_mul(10)
                            .and_then(|c| c.checked_add(digit))
                            .ok_or_else(|| err("run length overflow".into()))?,
                    );
                }
                'o' => {
                    let run = cnt.take().unwrap_or(1);
                    let end = x
                        .checked_add(run)
                        .filter(|&end| end <= width && y < height)
                        .ok_or_else(|| {
                            err(format!("pattern exceeds declared size {width}x{height}"))
                        })?;
                    cells.extend((x..end).map(|x| Coord::new(x, y)));
                    x = end;
                }
                'b' | '.' => x = x.saturating_add(cnt.take().unwrap_or(1)),
                '$' => (x, y) = (0, y.saturating_add(cnt.take().unwrap_or(1))),
                '!' => break 'body,
                c if c.is_whitespace() => {}
                c => return Err(err(format!("unexpected symbol `{c}`"))),
            }
        }
    }
    Ok(cells)
}

fn parse_header(header: &str) -> Option<(i64, i64)> {
    let mut width = None;
    let mut height = None;
    for field in header.split(',') {
        let (key, value) = field.split_once('=')?;
        match key.trim() {
            "x" => width = Some(value.trim().parse().ok()?),
            "y" => height = Some(value.trim().parse().ok()?),
            _ => {}
        }
    }
    Some((width?, height?))
}
