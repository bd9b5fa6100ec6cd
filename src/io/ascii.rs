use std::io::{BufRead, Write};

use crate::columns::Column;
use crate::diagram::PersistencePairs;
use crate::error::{Gf2Error, Result};
use crate::matrix::BoundaryMatrix;

/// One line per column: dimension, then space-separated strictly increasing
/// row indices. Empty columns are a line containing only the dimension.
pub fn save_matrix_ascii<C: Column, W: Write>(matrix: &mut BoundaryMatrix<C>, mut writer: W) -> Result<()> {
    for i in 0..matrix.num_cols() {
        let dim = matrix.dim(i);
        let col = matrix.get_col(i);
        write!(writer, "{dim}")?;
        for row in col {
            write!(writer, " {row}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn load_matrix_ascii<C: Column, R: BufRead>(reader: R) -> Result<BoundaryMatrix<C>>
where
    C::EntriesRepr: FromIterator<usize>,
{
    let mut cols = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let dim: usize = fields
            .next()
            .ok_or_else(|| Gf2Error::MalformedInput("missing dimension field".into()))?
            .parse()
            .map_err(|_| Gf2Error::MalformedInput(format!("non-integer dimension in line {line:?}")))?;
        let mut rows = Vec::new();
        for field in fields {
            let row: usize = field
                .parse()
                .map_err(|_| Gf2Error::MalformedInput(format!("non-integer row index in line {line:?}")))?;
            if let Some(&last) = rows.last() {
                if row <= last {
                    return Err(Gf2Error::MalformedInput(format!(
                        "row indices must be strictly increasing, got {row} after {last}"
                    )));
                }
            }
            rows.push(row);
        }
        cols.push(C::from((dim, rows_to_repr::<C>(rows))));
    }
    Ok(cols.into_iter().collect())
}

fn rows_to_repr<C: Column>(rows: Vec<usize>) -> C::EntriesRepr
where
    C::EntriesRepr: FromIterator<usize>,
{
    rows.into_iter().collect()
}

/// One pair per line: two decimal integers separated by a space.
pub fn save_pairs_ascii<W: Write>(pairs: &PersistencePairs, mut writer: W) -> Result<()> {
    for &(b, d) in pairs.iter() {
        writeln!(writer, "{b} {d}")?;
    }
    Ok(())
}

pub fn load_pairs_ascii<R: BufRead>(reader: R) -> Result<PersistencePairs> {
    let mut pairs = PersistencePairs::new();
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let b: usize = fields
            .next()
            .ok_or_else(|| Gf2Error::MalformedInput("missing birth field".into()))?
            .parse()
            .map_err(|_| Gf2Error::MalformedInput(format!("non-integer birth in line {line:?}")))?;
        let d: usize = fields
            .next()
            .ok_or_else(|| Gf2Error::MalformedInput("missing death field".into()))?
            .parse()
            .map_err(|_| Gf2Error::MalformedInput(format!("non-integer death in line {line:?}")))?;
        if b >= d {
            return Err(Gf2Error::MalformedInput(format!("pair must satisfy b < d, got ({b}, {d})")));
        }
        pairs.append(b, d);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::VecColumn;

    #[test]
    fn round_trips_a_small_matrix() {
        let mut m: BoundaryMatrix<VecColumn> = vec![
            (0, vec![]),
            (0, vec![]),
            (1, vec![0, 1]),
        ]
        .into_iter()
        .map(VecColumn::from)
        .collect();

        let mut buf = Vec::new();
        save_matrix_ascii(&mut m, &mut buf).unwrap();
        let mut loaded: BoundaryMatrix<VecColumn> = load_matrix_ascii(buf.as_slice()).unwrap();
        assert_eq!(loaded.get_col(2), vec![0, 1]);
        assert_eq!(loaded.dim(2), 1);
        assert_eq!(m, loaded);
    }

    #[test]
    fn rejects_non_increasing_rows() {
        let bad = "1 2 1\n";
        let result: Result<BoundaryMatrix<VecColumn>> = load_matrix_ascii(bad.as_bytes());
        assert!(matches!(result, Err(Gf2Error::MalformedInput(_))));
    }

    #[test]
    fn round_trips_pairs() {
        let mut pairs = PersistencePairs::new();
        pairs.append(1, 3);
        pairs.append(2, 4);
        let mut buf = Vec::new();
        save_pairs_ascii(&pairs, &mut buf).unwrap();
        let loaded = load_pairs_ascii(buf.as_slice()).unwrap();
        assert_eq!(pairs, loaded);
    }

    #[test]
    fn rejects_non_strictly_ordered_pair() {
        let bad = "3 1\n";
        let result = load_pairs_ascii(bad.as_bytes());
        assert!(matches!(result, Err(Gf2Error::MalformedInput(_))));
    }
}
