pub fn indicies_to_flags(indicies: &[usize], len: usize) -> Vec<bool> {
  let mut flags = vec![false; len];
  indicies.iter().for_each(|&i| flags[i] = true);
  flags
}

pub fn flags_to_indicies(flags: &[bool]) -> Vec<usize> {
  flags
    .iter()
    .enumerate()
    .filter_map(|(i, &flag)| flag.then_some(i))
    .collect()
}

/// Indicies in `0..len` that are not listed.
pub fn complement_indicies(indicies: &[usize], len: usize) -> Vec<usize> {
  let flags = indicies_to_flags(indicies, len);
  let inverted: Vec<bool> = flags.into_iter().map(|flag| !flag).collect();
  flags_to_indicies(&inverted)
}

pub fn sparse_to_dense_data<T>(sparse: Vec<(usize, T)>, len: usize) -> Vec<Option<T>> {
  let mut dense = Vec::from_iter((0..len).map(|_| None));
  sparse.into_iter().for_each(|(i, t)| dense[i] = Some(t));
  dense
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn flags_and_indicies() {
    let flags = indicies_to_flags(&[0, 4], 5);
    assert_eq!(flags, [true, false, false, false, true]);
    assert_eq!(flags_to_indicies(&flags), [0, 4]);
    assert_eq!(complement_indicies(&[0, 4], 5), [1, 2, 3]);
    assert!(complement_indicies(&[0, 1], 2).is_empty());
  }

  #[test]
  fn sparse_data_is_expanded() {
    let dense = sparse_to_dense_data(vec![(2, 'c'), (0, 'a')], 3);
    assert_eq!(dense, [Some('a'), None, Some('c')]);
  }
}
