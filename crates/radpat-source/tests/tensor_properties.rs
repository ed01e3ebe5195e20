use proptest::prelude::*;
use radpat_core::FaultGeometry;
use radpat_source::{build_moment_tensor, FaultBasis};

fn fault_strategy() -> impl Strategy<Value = FaultGeometry> {
    (0.0f64..360.0, 0.0f64..=90.0, -180.0f64..=180.0)
        .prop_map(|(strike, dip, rake)| FaultGeometry::new(strike, dip, rake))
}

/// Closed-form double couple in North-East-Down components.
fn aki_richards(fault: &FaultGeometry) -> [[f64; 3]; 3] {
    let phi = fault.strike.to_radians();
    let delta = fault.dip.to_radians();
    let lambda = fault.rake.to_radians();
    let (sd, cd) = delta.sin_cos();
    let (sl, cl) = lambda.sin_cos();
    let (s2d, c2d) = (2.0 * delta).sin_cos();
    let (sp, cp) = phi.sin_cos();
    let (s2p, c2p) = (2.0 * phi).sin_cos();

    let m_nn = -(sd * cl * s2p + s2d * sl * sp * sp);
    let m_ne = sd * cl * c2p + 0.5 * s2d * sl * s2p;
    let m_nd = -(cd * cl * cp + c2d * sl * sp);
    let m_ee = sd * cl * s2p - s2d * sl * cp * cp;
    let m_ed = -(cd * cl * sp - c2d * sl * cp);
    let m_dd = s2d * sl;
    [[m_nn, m_ne, m_nd], [m_ne, m_ee, m_ed], [m_nd, m_ed, m_dd]]
}

proptest! {
    #[test]
    fn shear_tensor_is_symmetric_traceless_unit_moment(fault in fault_strategy()) {
        let m = build_moment_tensor(&fault).unwrap();
        prop_assert!(m.is_symmetric(1e-14));
        prop_assert!(m.trace().abs() < 1e-12);
        prop_assert!((m.scalar_moment() - 1.0).abs() < 1e-12);
        let axes = m.principal_axes();
        prop_assert!(axes.values[1].abs() < 1e-9);
    }

    #[test]
    fn shear_tensor_matches_closed_form(fault in fault_strategy()) {
        let m = build_moment_tensor(&fault).unwrap();
        let expected = aki_richards(&fault);
        for row in 0..3 {
            for col in 0..3 {
                prop_assert!((m.get(row, col) - expected[row][col]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn tensile_partition_follows_poissons_ratio(
        fault in fault_strategy(),
        nu in 0.01f64..0.49,
    ) {
        let fault = fault.with_opening(90.0).with_poissons_ratio(nu);
        let m = build_moment_tensor(&fault).unwrap();
        let basis = FaultBasis::from_geometry(&fault).unwrap();
        let normal = m.contract(&basis.normal, &basis.normal);
        let along_strike = m.contract(&basis.strike, &basis.strike);
        let along_dip = m.contract(&basis.updip, &basis.updip);
        let ratio = nu / (1.0 - nu);
        prop_assert!((along_strike / normal - ratio).abs() < 1e-9);
        prop_assert!((along_dip / normal - ratio).abs() < 1e-9);
        prop_assert!(m.contract(&basis.strike, &basis.normal).abs() < 1e-9);
        prop_assert!(m.contract(&basis.updip, &basis.normal).abs() < 1e-9);
        let lame = 2.0 * nu / (1.0 - 2.0 * nu);
        prop_assert!((m.trace() - (3.0 * lame + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn fault_basis_is_right_handed(fault in fault_strategy()) {
        let basis = FaultBasis::from_geometry(&fault).unwrap();
        let r = basis.rotation();
        prop_assert!((r.transpose() * r - radpat_core::Matrix3::identity()).amax() < 1e-12);
        prop_assert!((r.determinant() - 1.0).abs() < 1e-12);
        prop_assert!(basis.normal[2] <= 1e-12);
        prop_assert!(basis.slip.dot(&basis.normal).abs() < 1e-12);
        prop_assert!((basis.null_axis().norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn construction_is_idempotent(fault in fault_strategy(), opening in 0.0f64..=90.0) {
        let fault = fault.with_opening(opening);
        let first = build_moment_tensor(&fault).unwrap();
        let second = build_moment_tensor(&fault).unwrap();
        prop_assert_eq!(first, second);
    }
}
