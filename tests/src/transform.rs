#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use kettle::math::{Matrix3x3, Matrix4x4, Normal, Point3, Transform};

    #[test]
    fn from_column_major_layout() {
        #[rustfmt::skip]
        let flat: [f32; 16] = [
            0.0, 1.0, 2.0, 3.0,
            4.0, 5.0, 6.0, 7.0,
            8.0, 9.0, 10.0, 11.0,
            12.0, 13.0, 14.0, 15.0,
        ];
        let m = Matrix4x4::from_column_major(&flat);
        // Each source chunk of four is one column
        assert_eq!(m.m[0], [0.0, 4.0, 8.0, 12.0]);
        assert_eq!(m.m[1], [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(m.m[2], [2.0, 6.0, 10.0, 14.0]);
        assert_eq!(m.m[3], [3.0, 7.0, 11.0, 15.0]);

        #[rustfmt::skip]
        let flat: [f32; 9] = [
            0.0, 1.0, 2.0,
            3.0, 4.0, 5.0,
            6.0, 7.0, 8.0,
        ];
        let m = Matrix3x3::from_column_major(&flat);
        assert_eq!(m.m[0], [0.0, 3.0, 6.0]);
        assert_eq!(m.m[1], [1.0, 4.0, 7.0]);
        assert_eq!(m.m[2], [2.0, 5.0, 8.0]);
    }

    #[test]
    fn transposed() {
        #[rustfmt::skip]
        let flat: [f32; 16] = [
            0.0, 1.0, 2.0, 3.0,
            4.0, 5.0, 6.0, 7.0,
            8.0, 9.0, 10.0, 11.0,
            12.0, 13.0, 14.0, 15.0,
        ];
        let m = Matrix4x4::from_column_major(&flat);
        let t = m.transposed();
        assert_eq!(t.m[0], [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(t.m[3], [12.0, 13.0, 14.0, 15.0]);
    }

    #[test]
    fn identity_point() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(&t * p, p);
    }

    #[test]
    fn translation_point() {
        // Column-major translation keeps the offset in the last chunk
        #[rustfmt::skip]
        let flat: [f32; 16] = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            10.0, 20.0, 30.0, 1.0,
        ];
        let t = Transform::new(
            Matrix4x4::from_column_major(&flat),
            Matrix3x3::identity(),
        );
        assert_eq!(&t * Point3::new(1.0, 2.0, 3.0), Point3::new(11.0, 22.0, 33.0));
        // Translation leaves normals untouched
        let n = Normal::new(0.0, 1.0, 0.0);
        assert_eq!(&t * n, n);
    }

    #[test]
    fn homogeneous_divide() {
        #[rustfmt::skip]
        let flat: [f32; 16] = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 2.0,
        ];
        let t = Transform::new(
            Matrix4x4::from_column_major(&flat),
            Matrix3x3::identity(),
        );
        assert_abs_diff_eq!(
            &t * Point3::new(2.0, 4.0, 6.0),
            Point3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn normal_matrix_applied_verbatim() {
        // Non-uniform scale by (2, 1, 1): the matching normal matrix is the
        // inverse transpose, diag(0.5, 1, 1)
        #[rustfmt::skip]
        let model_view: [f32; 16] = [
            2.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        #[rustfmt::skip]
        let normal_matrix: [f32; 9] = [
            0.5, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ];
        let t = Transform::new(
            Matrix4x4::from_column_major(&model_view),
            Matrix3x3::from_column_major(&normal_matrix),
        );
        assert_eq!(&t * Point3::new(1.0, 1.0, 0.0), Point3::new(2.0, 1.0, 0.0));
        let n = &t * Normal::new(1.0, 1.0, 0.0);
        assert_eq!(n, Normal::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn has_nans() {
        let mut flat = [0.0f32; 16];
        flat[0] = f32::NAN;
        let m = Matrix4x4::from_column_major(&flat);
        assert!(m.has_nans());
        assert!(!Matrix4x4::<f32>::identity().has_nans());
    }
}
