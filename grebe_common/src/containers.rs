/// Removes the first element comparing equal to `value`, if any.
pub fn erase_first<T, U>(vec: &mut Vec<T>, value: &U)
where
    T: PartialEq<U>,
{
    if let Some(idx) = vec.iter().position(|elem| elem == value) {
        vec.remove(idx);
    }
}

/// Appends `value` unless an equal element is already present; returns
/// whether it appended.
pub fn add_unique<T>(vec: &mut Vec<T>, value: T) -> bool
where
    T: PartialEq,
{
    if contains(vec, &value) {
        false
    } else {
        vec.push(value);
        true
    }
}

/// Linear membership scan.
pub fn contains<T, U>(seq: &[T], value: &U) -> bool
where
    T: PartialEq<U>,
{
    seq.iter().any(|elem| elem == value)
}
