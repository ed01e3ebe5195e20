use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use radpat_core::{FaultGeometry, Matrix3, MomentTensor, RadError, RayGeometry, Vector3};
use radpat_pattern::{
    calc_radiation_pattern, calc_radiation_pattern_for_fault, calc_unit_vectors,
    radiation_for_ray, radiation_from_frame, ray_from_vector,
};
use radpat_source::{build_moment_tensor, FaultBasis};

fn right_lateral_east_west() -> MomentTensor {
    build_moment_tensor(&FaultGeometry::new(90.0, 90.0, 180.0)).expect("tensor")
}

/// Builds the tensor with E-N-Up rotations: fault axes (down-dip, strike,
/// normal) are tilted by dip about the strike axis, then turned by strike
/// about the vertical.
fn enu_rotation_reference(fault: &FaultGeometry) -> Matrix3<f64> {
    let (sin_rake, cos_rake) = fault.rake.to_radians().sin_cos();
    let (sin_open, cos_open) = fault.opening_angle.to_radians().sin_cos();
    let lame = fault.lame_ratio();

    let mut shear = Matrix3::zeros();
    shear[(1, 2)] = cos_rake;
    shear[(2, 1)] = cos_rake;
    shear[(0, 2)] = -sin_rake;
    shear[(2, 0)] = -sin_rake;
    let opening = Matrix3::from_diagonal(&Vector3::new(lame, lame, lame + 2.0));
    let m = shear * cos_open + opening * sin_open;

    let (sd, cd) = fault.dip.to_radians().sin_cos();
    let tilt = Matrix3::new(cd, 0.0, sd, 0.0, 1.0, 0.0, -sd, 0.0, cd);
    let m = tilt * m * tilt.transpose();

    let (ss, cs) = fault.strike.to_radians().sin_cos();
    let turn = Matrix3::new(cs, ss, 0.0, -ss, cs, 0.0, 0.0, 0.0, 1.0);
    turn * m * turn.transpose()
}

#[test]
fn p_coefficients_for_strike_slip_receivers() {
    let m = right_lateral_east_west();
    let down_south_west = calc_radiation_pattern(&m, 130.0, 45.0).expect("coefficients");
    assert_abs_diff_eq!(down_south_west.p, 0.59, epsilon = 0.01);
    let steep = calc_radiation_pattern(&m, 20.0, -45.0).expect("coefficients");
    assert_abs_diff_eq!(steep.p, -0.12, epsilon = 0.01);

    // P = sin^2(takeoff) sin(2 azimuth) for this mechanism.
    let expected = 130f64.to_radians().sin().powi(2) * 90f64.to_radians().sin();
    assert_abs_diff_eq!(down_south_west.p, expected, epsilon = 1e-12);
}

#[test]
fn null_axis_receiver_sees_no_radiation() {
    let fault = FaultGeometry::new(30.0, 60.0, 45.0);
    let m = build_moment_tensor(&fault).expect("tensor");
    let basis = FaultBasis::from_geometry(&fault).expect("basis");
    for axis in [basis.null_axis(), -basis.null_axis(), m.principal_axes().null()] {
        let ray = ray_from_vector(&axis).expect("ray");
        let c = radiation_for_ray(&m, &ray).expect("coefficients");
        assert_abs_diff_eq!(c.p, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.s_amplitude(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn fault_normal_is_nodal_for_p_and_maximal_for_s() {
    let fault = FaultGeometry::new(300.0, 25.0, 110.0);
    let m = build_moment_tensor(&fault).expect("tensor");
    let basis = FaultBasis::from_geometry(&fault).expect("basis");
    let ray = ray_from_vector(&basis.normal).expect("ray");
    let c = radiation_for_ray(&m, &ray).expect("coefficients");
    assert_abs_diff_eq!(c.p, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.s_amplitude(), 1.0, epsilon = 1e-12);
}

#[test]
fn tension_axis_has_maximum_compression() {
    let m = build_moment_tensor(&FaultGeometry::new(10.0, 70.0, -30.0)).expect("tensor");
    let axes = m.principal_axes();
    let ray = ray_from_vector(&axes.tension()).expect("ray");
    let c = radiation_for_ray(&m, &ray).expect("coefficients");
    assert_abs_diff_eq!(c.p, 1.0, epsilon = 1e-12);
    let ray = ray_from_vector(&axes.pressure()).expect("ray");
    let c = radiation_for_ray(&m, &ray).expect("coefficients");
    assert_abs_diff_eq!(c.p, -1.0, epsilon = 1e-12);
}

#[test]
fn explosion_radiates_only_p() {
    let m = MomentTensor::from_components([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
        .expect("isotropic");
    for (takeoff, azimuth) in [(0.0, 0.0), (45.0, 100.0), (170.0, -35.0)] {
        let c = calc_radiation_pattern(&m, takeoff, azimuth).expect("coefficients");
        assert_abs_diff_eq!(c.p, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.sh, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.sv, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn sh_sign_follows_observer_right() {
    // Horizontal ray to the north from a right-lateral east-west fault: the
    // north block moves east, i.e. to the observer's right.
    let c = calc_radiation_pattern(&right_lateral_east_west(), 90.0, 0.0).expect("coefficients");
    assert_abs_diff_eq!(c.sh, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.p, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.sv, 0.0, epsilon = 1e-12);
}

#[test]
fn fault_overload_matches_two_step_evaluation() {
    let fault = FaultGeometry::new(75.0, 40.0, 60.0).with_opening(20.0);
    let ray = RayGeometry::new(65.0, 210.0);
    let direct = calc_radiation_pattern_for_fault(&fault, &ray).expect("direct");
    let m = build_moment_tensor(&fault).expect("tensor");
    let frame = calc_unit_vectors(ray.takeoff_angle, ray.azimuth).expect("frame");
    assert_eq!(direct, radiation_from_frame(&m, &frame));
}

#[test]
fn fault_overload_propagates_invalid_parameters() {
    let ray = RayGeometry::new(65.0, 210.0);
    let err = calc_radiation_pattern_for_fault(&FaultGeometry::new(0.0, 120.0, 0.0), &ray)
        .expect_err("dip");
    assert!(matches!(err, RadError::InvalidParameter(_)));
    assert_eq!(err.parameter(), Some("dip"));

    let err = calc_radiation_pattern_for_fault(
        &FaultGeometry::new(0.0, 120.0, 0.0),
        &RayGeometry::new(f64::NAN, 0.0),
    )
    .expect_err("ray first");
    assert_eq!(err.parameter(), Some("takeoff_angle"));
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let m = build_moment_tensor(&FaultGeometry::new(12.0, 34.0, 56.0).with_opening(7.0))
        .expect("tensor");
    let first = calc_radiation_pattern(&m, 33.0, 144.0).expect("first");
    let second = calc_radiation_pattern(&m, 33.0, 144.0).expect("second");
    assert_eq!(first.p.to_bits(), second.p.to_bits());
    assert_eq!(first.sh.to_bits(), second.sh.to_bits());
    assert_eq!(first.sv.to_bits(), second.sv.to_bits());
}

proptest! {
    #[test]
    fn tensor_matches_enu_rotation_reference(
        strike in 0.0f64..360.0,
        dip in 0.0f64..=90.0,
        rake in -180.0f64..=180.0,
        opening in 0.0f64..=90.0,
        nu in 0.05f64..0.45,
    ) {
        let fault = FaultGeometry::new(strike, dip, rake)
            .with_opening(opening)
            .with_poissons_ratio(nu);
        let enu = build_moment_tensor(&fault).unwrap().to_enu();
        let reference = enu_rotation_reference(&fault);
        prop_assert!((enu.matrix() - reference).amax() < 1e-9);
    }

    #[test]
    fn coefficients_are_frame_independent(
        strike in 0.0f64..360.0,
        dip in 0.0f64..=90.0,
        rake in -180.0f64..=180.0,
        takeoff in 0.0f64..=180.0,
        azimuth in -180.0f64..180.0,
    ) {
        let m = build_moment_tensor(&FaultGeometry::new(strike, dip, rake)).unwrap();
        let frame = calc_unit_vectors(takeoff, azimuth).unwrap();
        let ned = radiation_from_frame(&m, &frame);
        let enu = radiation_from_frame(&m.to_enu(), &frame.to_enu());
        prop_assert!((ned.p - enu.p).abs() < 1e-12);
        prop_assert!((ned.sh - enu.sh).abs() < 1e-12);
        prop_assert!((ned.sv - enu.sv).abs() < 1e-12);
        // A unit double couple never exceeds unit amplitude.
        prop_assert!(ned.p.abs() <= 1.0 + 1e-12);
        prop_assert!(ned.s_amplitude() <= 1.0 + 1e-12);
    }
}
