/// Triangular weights over the character positions of `s`
///
/// Weights rise linearly from 1 to a peak at the midpoint and fall back to 1,
/// approximating the shape of a normal distribution. Odd lengths hold the
/// peak for one extra step so that it sits on the central position.
///
/// ```
/// use amogen::math::weights::pseudonormal_weights;
///
/// assert_eq!(pseudonormal_weights("amogu"), vec![1, 2, 3, 2, 1]);
/// assert_eq!(pseudonormal_weights("mogu"), vec![1, 2, 2, 1]);
/// ```
pub fn pseudonormal_weights(s: &str) -> Vec<u32> {
    let len = s.chars().count() as u32;
    let mid = len / 2;
    let peak = if len.is_multiple_of(2) { mid } else { mid + 1 };

    (1..=peak).chain((1..=mid).rev()).collect()
}
