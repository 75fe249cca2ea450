#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::panic;

    use kettle::math::{Normal, Vec2, Vec3};

    // Use Vec2 as the permutation check for brevity. The impls are expanded
    // using the concrete components of the type so any component count works
    // if one does.

    #[test]
    fn new() {
        let v = Vec2::new(0.0, 1.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);

        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, 2.0);
    }

    #[test]
    fn zeros_ones() {
        assert_eq!(Vec2::zeros(), Vec2::new(0, 0));
        assert_eq!(Vec2::ones(), Vec2::new(1, 1));
        assert_eq!(Vec3::zeros(), Vec3::new(0, 0, 0));
        assert_eq!(Vec3::ones(), Vec3::new(1, 1, 1));
    }

    #[test]
    fn has_nans() {
        // The constructor should panic on NaN in debug
        let result = panic::catch_unwind(|| Vec2::new(f32::NAN, 0.0));
        assert!(result.is_err());
        let result = panic::catch_unwind(|| Vec3::new(0.0, f32::NAN, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn dot() {
        assert_eq!(Vec2::new(2, 3).dot(Vec2::new(4, 5)), 2 * 4 + 3 * 5);
        assert_eq!(
            Vec3::new(2, 3, 4).dot(Vec3::new(5, 6, 7)),
            2 * 5 + 3 * 6 + 4 * 7
        );
    }

    #[test]
    fn cross() {
        assert_eq!(
            Vec3::new(1, 0, 0).cross(Vec3::new(0, 1, 0)),
            Vec3::new(0, 0, 1)
        );
        assert_eq!(
            Vec3::new(0, 1, 0).cross(Vec3::new(0, 0, 1)),
            Vec3::new(1, 0, 0)
        );
    }

    #[test]
    fn len() {
        assert_eq!(Vec2::new(3.0, 4.0).len_sqr(), 25.0);
        assert_eq!(Vec2::new(3.0, 4.0).len(), 5.0);
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).len(), 7.0);
    }

    #[test]
    fn normalized() {
        assert_abs_diff_eq!(Vec3::new(0.0, 2.0, 0.0).normalized().len(), 1.0);
        assert_abs_diff_eq!(
            Vec3::new(1.0, 1.0, 1.0).normalized().len(),
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn min_max() {
        let a = Vec3::new(0, 5, 2);
        let b = Vec3::new(3, 1, 4);
        assert_eq!(a.min(b), Vec3::new(0, 1, 2));
        assert_eq!(a.max(b), Vec3::new(3, 5, 4));
    }

    #[test]
    fn index() {
        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
        assert_eq!(v[2], v.z);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Vec3::new(1, 2, 3) + Vec3::new(4, 5, 6), Vec3::new(5, 7, 9));
        assert_eq!(Vec3::new(4, 5, 6) - Vec3::new(1, 2, 3), Vec3::new(3, 3, 3));
        assert_eq!(Vec3::new(1, 2, 3) * 2, Vec3::new(2, 4, 6));
        assert_eq!(Vec3::new(2, 4, 6) / 2, Vec3::new(1, 2, 3));
        assert_eq!(-Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn normal_interop() {
        let n = Normal::new(0.0, 0.0, 1.0);
        assert_eq!(Vec3::new(0.0, 0.0, -1.0).dot_n(n), -1.0);
        assert_eq!(Vec3::from(n), Vec3::new(0.0, 0.0, 1.0));
    }
}
