use std::io::{Read, Write};

use crate::columns::Column;
use crate::diagram::PersistencePairs;
use crate::error::{Gf2Error, Result};
use crate::matrix::BoundaryMatrix;

fn write_i64<W: Write>(writer: &mut W, value: i64) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn read_i64<R: Read>(reader: &mut R) -> Result<i64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Gf2Error::MalformedInput("truncated stream".into()),
        _ => Gf2Error::Io(e),
    })?;
    Ok(i64::from_le_bytes(buf))
}

fn read_usize<R: Read>(reader: &mut R) -> Result<usize> {
    let value = read_i64(reader)?;
    usize::try_from(value).map_err(|_| Gf2Error::MalformedInput(format!("expected a nonnegative integer, got {value}")))
}

/// `N`, then for each column: `dim`, `k`, `row_0 .. row_{k-1}`. All values are
/// 64-bit little-endian signed integers.
pub fn save_matrix_binary<C: Column, W: Write>(matrix: &mut BoundaryMatrix<C>, mut writer: W) -> Result<()> {
    write_i64(&mut writer, matrix.num_cols() as i64)?;
    for i in 0..matrix.num_cols() {
        let col = matrix.get_col(i);
        write_i64(&mut writer, matrix.dim(i) as i64)?;
        write_i64(&mut writer, col.len() as i64)?;
        for row in col {
            write_i64(&mut writer, row as i64)?;
        }
    }
    Ok(())
}

pub fn load_matrix_binary<C: Column, R: Read>(mut reader: R) -> Result<BoundaryMatrix<C>>
where
    C::EntriesRepr: FromIterator<usize>,
{
    let n = read_usize(&mut reader)?;
    let mut cols = Vec::with_capacity(n);
    for _ in 0..n {
        let dim = read_usize(&mut reader)?;
        let k = read_usize(&mut reader)?;
        let mut rows = Vec::with_capacity(k);
        for _ in 0..k {
            let row = read_usize(&mut reader)?;
            if let Some(&last) = rows.last() {
                if row <= last {
                    return Err(Gf2Error::MalformedInput(format!(
                        "row indices must be strictly increasing, got {row} after {last}"
                    )));
                }
            }
            rows.push(row);
        }
        cols.push(C::from((dim, rows.into_iter().collect())));
    }
    Ok(cols.into_iter().collect())
}

/// `count`, then `count` pairs of 64-bit little-endian integers.
pub fn save_pairs_binary<W: Write>(pairs: &PersistencePairs, mut writer: W) -> Result<()> {
    write_i64(&mut writer, pairs.size() as i64)?;
    for &(b, d) in pairs.iter() {
        write_i64(&mut writer, b as i64)?;
        write_i64(&mut writer, d as i64)?;
    }
    Ok(())
}

pub fn load_pairs_binary<R: Read>(mut reader: R) -> Result<PersistencePairs> {
    let count = read_usize(&mut reader)?;
    let mut pairs = PersistencePairs::new();
    for _ in 0..count {
        let b = read_usize(&mut reader)?;
        let d = read_usize(&mut reader)?;
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
        let mut m: BoundaryMatrix<VecColumn> = vec![(0, vec![]), (0, vec![]), (1, vec![0, 1])]
            .into_iter()
            .map(VecColumn::from)
            .collect();
        let mut buf = Vec::new();
        save_matrix_binary(&mut m, &mut buf).unwrap();
        let mut loaded: BoundaryMatrix<VecColumn> = load_matrix_binary(buf.as_slice()).unwrap();
        assert_eq!(loaded.get_col(2), vec![0, 1]);
        assert_eq!(m, loaded);
    }

    #[test]
    fn rejects_truncated_stream() {
        let buf = 3i64.to_le_bytes();
        let result: Result<BoundaryMatrix<VecColumn>> = load_matrix_binary(buf.as_slice());
        assert!(matches!(result, Err(Gf2Error::MalformedInput(_))));
    }

    #[test]
    fn round_trips_pairs() {
        let mut pairs = PersistencePairs::new();
        pairs.append(1, 3);
        pairs.append(2, 4);
        let mut buf = Vec::new();
        save_pairs_binary(&pairs, &mut buf).unwrap();
        let loaded = load_pairs_binary(buf.as_slice()).unwrap();
        assert_eq!(pairs, loaded);
    }
}
