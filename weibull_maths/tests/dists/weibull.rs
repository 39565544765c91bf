use float_cmp::approx_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use weibull_maths::dists::{EULER_GAMMA, LN_2};
use weibull_maths::*;

fn marshal_through<M: ParameterMarshaler>(from: &M, to: &mut M) -> Result<(), DistErr> {
    let mut buf = vec![Parameter::default(); from.num_parameters()];
    from.marshal_parameters_into(&mut buf)?;
    to.unmarshal_parameters(&buf)
}

#[test]
fn parameter_interchange() {
    let src = Weibull::new(0.75, 12.5);
    let mut dst = Weibull::new(1.0, 1.0);
    marshal_through(&src, &mut dst).unwrap();
    assert_eq!(dst.shape(), 0.75);
    assert_eq!(dst.scale(), 12.5);

    let wrong_case = [Parameter::new("k", 1.0), Parameter::new("λ", 1.0)];
    assert!(dst.unmarshal_parameters(&wrong_case).is_err());
    assert!(dst.unmarshal_parameters(&wrong_case[..1]).is_err());
    assert!(dst.unmarshal_parameters(&[]).is_err());
    assert_eq!(dst, src);
}

#[test]
fn values_are_not_range_checked_on_unmarshal() {
    let mut w = Weibull::new(1.0, 1.0);
    w.unmarshal_parameters(&[Parameter::new("K", -3.0), Parameter::new("λ", 0.0)])
        .unwrap();
    assert_eq!(w, Weibull::new(-3.0, 0.0));
}

#[test]
fn generic_cdf_and_sample() {
    fn median_of<D: CDF>(d: &D) -> f64 {
        d.inverse_cdf(0.5).unwrap()
    }

    let w = Weibull::new(3.0, 2.0);
    assert!(approx_eq!(f64, median_of(&w), w.median(), epsilon = 1e-12));
    assert!(approx_eq!(f64, CDF::cdf(&w, median_of(&w)), 0.5, epsilon = 1e-12));
    assert!(w.inverse_cdf(2.0).is_err());

    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        if let Ok(x) = Sample::sample(&w, &mut rng) {
            assert!(x >= 0.0);
        }
    }
}

#[test]
fn sample_with_trait_object_source() {
    let w = Weibull::new(2.0, 1.0);
    let mut inner = StdRng::seed_from_u64(1);
    let rng: &mut dyn rand::RngCore = &mut inner;
    for _ in 0..50 {
        match w.sample(&mut *rng) {
            Ok(x) => assert!(x >= 0.0),
            Err(DistErr::Closed01(p)) => assert!(!(0.0..=1.0).contains(&p)),
            Err(err) => panic!("unexpected error: {}", err),
        }
    }
}

#[test]
fn reproducible_with_seeded_default_source() {
    let w = Weibull::new(1.5, 4.0);
    let mut a = DefaultRng::seeded(2024);
    let mut b = DefaultRng::seeded(2024);
    let xs: Vec<_> = (0..32).map(|_| w.sample(&mut a)).collect();
    let ys: Vec<_> = (0..32).map(|_| w.sample(&mut b)).collect();
    assert_eq!(xs, ys);
}

#[test]
fn entropy_formula() {
    let w = Weibull::new(4.0, 0.5);
    let expected = EULER_GAMMA * 0.75 + (0.125f64).ln() + 1.0;
    assert!(approx_eq!(f64, w.entropy(), expected, epsilon = 1e-15));
}

#[test]
fn shape_one_is_exponential() {
    let w = Weibull::new(1.0, 2.0);
    assert!(approx_eq!(f64, w.mean(), 2.0, epsilon = 1e-10));
    assert!(approx_eq!(f64, w.median(), 2.0 * LN_2, epsilon = 1e-15));
    assert!(approx_eq!(f64, w.cdf(2.0), 0.6321205588285577, epsilon = 1e-12));
    assert_eq!(w.mode(), 0.0);
    for &x in &[0.5, 1.0, 3.0] {
        assert!(approx_eq!(f64, w.dlog_prob_dx(x), -0.5, epsilon = 1e-15));
    }
}

#[test]
fn skewness_changes_sign() {
    // right-skewed for small shapes, left-skewed past k ≈ 3.6
    assert!(Weibull::new(1.5, 1.0).skewness() > 0.0);
    assert!(Weibull::new(10.0, 1.0).skewness() < 0.0);
}

#[cfg(feature = "persistence")]
#[test]
fn serde_round_trip() {
    let w = Weibull::new(2.5, 0.25);
    let json = serde_json::to_string(&w).unwrap();
    let back: Weibull = serde_json::from_str(&json).unwrap();
    assert_eq!(back, w);

    let params = serde_json::to_string(&w.marshal_parameters()).unwrap();
    assert_eq!(params, r#"[{"name":"K","value":2.5},{"name":"λ","value":0.25}]"#);
    let parsed: Vec<Parameter> = serde_json::from_str(&params).unwrap();
    let mut other = Weibull::new(1.0, 1.0);
    other.unmarshal_parameters(&parsed).unwrap();
    assert_eq!(other, w);
}
