use crate::{triangle::Triangle, Scalar};

/// Find index of the largest value in single left-to-right pass.
///
/// Only strictly greater value replaces current best, so on ties the first one wins.
/// Returns `None` for empty input.
///
/// # Examples
/// ```
/// use triangle_area_core::prelude::*;
///
/// assert_eq!(find_largest_index([3.0, 5.0, 5.0, 2.0]), Some(1));
/// assert_eq!(find_largest_index(std::iter::empty()), None);
/// ```
pub fn find_largest_index<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = Scalar>,
{
    let mut values = values.into_iter().enumerate();
    let (mut best_index, mut best) = values.next()?;
    for (index, value) in values {
        if value > best {
            best_index = index;
            best = value;
        }
    }
    Some(best_index)
}

/// Find triangle with the largest area, first one wins on ties.
///
/// Returns index of found triangle in the slice along with the triangle.
pub fn find_largest(triangles: &[Triangle]) -> Option<(usize, &Triangle)> {
    let index = find_largest_index(triangles.iter().map(Triangle::area))?;
    Some((index, &triangles[index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn right_triangle(width: Scalar, height: Scalar) -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(0.0, height),
        )
    }

    #[test]
    fn test_first_of_ties_wins() {
        assert_eq!(find_largest_index([3.0, 5.0, 5.0, 2.0]), Some(1));
        assert_eq!(find_largest_index([1.0, 1.0, 1.0]), Some(0));
        assert_eq!(find_largest_index([0.0]), Some(0));
        assert_eq!(find_largest_index(Vec::new()), None);
    }

    #[test]
    fn test_nan_never_replaces_best() {
        assert_eq!(find_largest_index([1.0, Scalar::NAN, 0.5]), Some(0));
        assert_eq!(find_largest_index([Scalar::NAN, 2.0]), Some(0));
    }

    #[test]
    fn test_find_largest() {
        // areas: 3, 5, 5, 2
        let triangles = [
            right_triangle(2.0, 3.0),
            right_triangle(2.0, 5.0),
            right_triangle(5.0, 2.0),
            right_triangle(1.0, 4.0),
        ];
        let (index, triangle) = find_largest(&triangles).unwrap();
        assert_eq!(index, 1);
        assert_eq!(*triangle, triangles[1]);
        assert!(find_largest(&[]).is_none());
    }

    #[test]
    fn test_find_largest_later() {
        let triangles = [right_triangle(4.0, 3.0), right_triangle(10.0, 10.0)];
        let (index, triangle) = find_largest(&triangles).unwrap();
        assert_eq!(index, 1);
        assert_eq!(triangle.area(), 50.0);
    }
}
