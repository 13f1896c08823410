use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::PileError;

/// Checks that every index is below `bound` and that none repeats.
///
/// All offending indices are collected before failing. Out-of-range indices
/// are reported ahead of repeated ones, and out-of-range indices are not
/// counted towards repeats.
pub(super) fn check_distinct(indices: &[usize], bound: usize) -> Result<(), PileError> {
    let mut invalid = Vec::new();
    let mut repeated = Vec::new();
    let mut seen: HashMap<usize, usize> = HashMap::with_capacity(indices.len());

    for &index in indices {
        if index >= bound {
            invalid.push(index);
            continue;
        }
        let count = seen.entry(index).or_insert(0);
        *count += 1;
        if *count == 2 {
            repeated.push(index);
        }
    }

    if !invalid.is_empty() {
        log::trace!("indices {invalid:?} out of range for bound {bound}");
        return Err(PileError::OutOfRange { indices: invalid });
    }
    if !repeated.is_empty() {
        log::trace!("indices {repeated:?} repeated");
        return Err(PileError::RepeatedIndex { indices: repeated });
    }
    Ok(())
}

/// Checks that every index is below `bound`, allowing repeats.
pub(super) fn check_in_range(indices: &[usize], bound: usize) -> Result<(), PileError> {
    let invalid: Vec<usize> = indices.iter().copied().filter(|&i| i >= bound).collect();
    if invalid.is_empty() {
        Ok(())
    } else {
        log::trace!("indices {invalid:?} out of range for bound {bound}");
        Err(PileError::OutOfRange { indices: invalid })
    }
}

/// For each index, counts the earlier indices in the list that are smaller.
///
/// Removing in list order, `indices[i] - offsets[i]` is the live position of
/// the card that sat at `indices[i]` before anything was removed.
pub(super) fn removal_offsets(indices: &[usize]) -> Vec<usize> {
    let mut offsets = alloc::vec![0; indices.len()];
    for (i, &earlier) in indices.iter().enumerate() {
        for (offset, &later) in offsets[i + 1..].iter_mut().zip(&indices[i + 1..]) {
            if earlier < later {
                *offset += 1;
            }
        }
    }
    offsets
}
