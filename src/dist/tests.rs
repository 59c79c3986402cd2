use super::*;

// ======================== Normal ========================

#[test]
fn normal_pdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    let expected = 1.0 / (2.0 * core::f64::consts::PI).sqrt();
    assert!((n.pdf(0.0) - expected).abs() < 1e-14);
}

#[test]
fn normal_cdf_standard() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);
    // Φ(1) ≈ 0.8413
    assert!((n.cdf(1.0) - 0.8413447460685429).abs() < 1e-10);
    // Φ(-1) ≈ 0.1587
    assert!((n.cdf(-1.0) - 0.15865525393145702).abs() < 1e-10);
}

#[test]
fn normal_sf_complement() {
    let n = Normal::new(1.0_f64, 2.0).unwrap();
    for &x in &[-3.0, -1.0, 0.0, 1.0, 2.5, 6.0] {
        assert!((n.cdf(x) + n.sf(x) - 1.0).abs() < 1e-12, "x={x}");
    }
}

#[test]
fn normal_quantile() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!((n.quantile(0.5).unwrap()).abs() < 1e-8);
    assert!((n.quantile(0.975).unwrap() - 1.959964).abs() < 1e-4);
    assert!((n.quantile(0.025).unwrap() + 1.959964).abs() < 1e-4);
}

#[test]
fn normal_quantile_boundaries() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert_eq!(n.quantile(0.0).unwrap(), f64::NEG_INFINITY);
    assert_eq!(n.quantile(1.0).unwrap(), f64::INFINITY);
    assert_eq!(n.quantile(-0.1).unwrap_err(), DistError::InvalidArgument);
    assert_eq!(n.quantile(1.1).unwrap_err(), DistError::InvalidArgument);
    assert_eq!(n.quantile(f64::NAN).unwrap_err(), DistError::InvalidArgument);
}

#[test]
fn normal_mean_variance() {
    let n = Normal::new(3.0_f64, 2.0).unwrap();
    assert!((n.mean() - 3.0).abs() < 1e-14);
    assert!((n.variance() - 4.0).abs() < 1e-14);
    assert!((n.std_dev() - 2.0).abs() < 1e-14);
}

#[test]
fn normal_ln_pdf() {
    let n = Normal::new(0.0_f64, 1.0).unwrap();
    assert!((n.ln_pdf(0.0) - n.pdf(0.0).ln()).abs() < 1e-14);
    assert!((n.ln_pdf(3.0) - n.pdf(3.0).ln()).abs() < 1e-13);
}

#[test]
fn normal_invalid() {
    assert_eq!(Normal::new(0.0_f64, 0.0).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Normal::new(0.0_f64, -1.0).unwrap_err(), DistError::InvalidParameter);
}

#[test]
fn normal_mle() {
    let sample = [1.0_f64, 2.0, 3.0, 4.0];
    let (mu, sigma) = Normal::mle(&sample).unwrap();
    assert!((mu - 2.5).abs() < 1e-14);
    assert!((sigma - 1.25_f64.sqrt()).abs() < 1e-14);
    assert_eq!(Normal::mle(&[1.0_f64]).unwrap_err(), DistError::UnsupportedSample);
    assert_eq!(
        Normal::mle(&[2.0_f64, 2.0, 2.0]).unwrap_err(),
        DistError::UnsupportedSample
    );
}

#[test]
fn normal_set_params() {
    let mut n = Normal::new(0.0_f64, 1.0).unwrap();
    n.set_params(5.0, 3.0).unwrap();
    assert!((n.mean() - 5.0).abs() < 1e-14);
    assert_eq!(n.set_params(0.0, -1.0).unwrap_err(), DistError::InvalidParameter);
    // Failed update leaves the previous parameters intact
    assert!((n.mean() - 5.0).abs() < 1e-14);
}

#[test]
fn normal_f32() {
    let n = Normal::new(0.0_f32, 1.0).unwrap();
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-5);
    assert!((n.mean()).abs() < 1e-7);
}

// ======================== Uniform ========================

#[test]
fn uniform_pdf_cdf() {
    let u = Uniform::new(0.0_f64, 1.0).unwrap();
    assert!((u.pdf(0.5) - 1.0).abs() < 1e-14);
    assert!((u.pdf(-0.1)).abs() < 1e-14);
    assert!((u.pdf(1.1)).abs() < 1e-14);
    assert!((u.cdf(0.5) - 0.5).abs() < 1e-14);
    assert!((u.cdf(-0.1)).abs() < 1e-14);
    assert!((u.cdf(1.1) - 1.0).abs() < 1e-14);
}

#[test]
fn uniform_quantile() {
    let u = Uniform::new(2.0_f64, 5.0).unwrap();
    assert!((u.quantile(0.0).unwrap() - 2.0).abs() < 1e-14);
    assert!((u.quantile(1.0).unwrap() - 5.0).abs() < 1e-14);
    assert!((u.quantile(0.5).unwrap() - 3.5).abs() < 1e-14);
    assert_eq!(u.quantile(-0.5).unwrap_err(), DistError::InvalidArgument);
}

#[test]
fn uniform_mean_variance() {
    let u = Uniform::new(0.0_f64, 12.0).unwrap();
    assert!((u.mean() - 6.0).abs() < 1e-14);
    assert!((u.variance() - 12.0).abs() < 1e-14);
}

#[test]
fn uniform_invalid() {
    assert_eq!(Uniform::new(1.0_f64, 1.0).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Uniform::new(2.0_f64, 1.0).unwrap_err(), DistError::InvalidParameter);
}

#[test]
fn uniform_mle() {
    let sample = [3.0_f64, 1.0, 4.0, 1.5, 2.0];
    let (a, b) = Uniform::mle(&sample).unwrap();
    assert!((a - 1.0).abs() < 1e-14);
    assert!((b - 4.0).abs() < 1e-14);
    assert_eq!(
        Uniform::mle(&[2.0_f64, 2.0]).unwrap_err(),
        DistError::UnsupportedSample
    );
}

// ======================== Exponential ========================

#[test]
fn exponential_pdf_cdf() {
    let e = Exponential::new(1.0_f64).unwrap();
    assert!((e.pdf(0.0) - 1.0).abs() < 1e-14);
    assert!((e.pdf(1.0) - (-1.0_f64).exp()).abs() < 1e-14);
    assert!((e.cdf(0.0)).abs() < 1e-14);
    assert!((e.cdf(1.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-14);
}

#[test]
fn exponential_sf_exact() {
    let e = Exponential::new(2.0_f64).unwrap();
    // sf computed directly, so no cancellation deep in the tail
    assert!((e.sf(20.0) - (-40.0_f64).exp()).abs() < 1e-30);
}

#[test]
fn exponential_quantile() {
    let e = Exponential::new(2.0_f64).unwrap();
    assert!((e.quantile(0.0).unwrap()).abs() < 1e-14);
    assert_eq!(e.quantile(1.0).unwrap(), f64::INFINITY);
    let q = e.quantile(0.5).unwrap();
    assert!((e.cdf(q) - 0.5).abs() < 1e-12);
}

#[test]
fn exponential_mean_variance() {
    let e = Exponential::new(0.5_f64).unwrap();
    assert!((e.mean() - 2.0).abs() < 1e-14);
    assert!((e.variance() - 4.0).abs() < 1e-14);
}

#[test]
fn exponential_invalid() {
    assert_eq!(Exponential::new(0.0_f64).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Exponential::new(-1.0_f64).unwrap_err(), DistError::InvalidParameter);
}

#[test]
fn exponential_mle() {
    let sample = [1.0_f64, 2.0, 3.0];
    assert!((Exponential::mle(&sample).unwrap() - 0.5).abs() < 1e-14);
    assert_eq!(
        Exponential::mle(&[1.0_f64, -2.0]).unwrap_err(),
        DistError::UnsupportedSample
    );
}

// ======================== Gamma ========================

#[test]
fn gamma_pdf_at_mode() {
    // Gamma(2, 1): mode at x = (α-1)/β = 1
    let g = Gamma::new(2.0_f64, 1.0).unwrap();
    // pdf(1) = 1^1 * exp(-1) / Γ(2) = 1/e
    assert!((g.pdf(1.0) - (-1.0_f64).exp()).abs() < 1e-14);
}

#[test]
fn gamma_cdf() {
    // Gamma(1, 1) = Exponential(1)
    let g = Gamma::new(1.0_f64, 1.0).unwrap();
    assert!((g.cdf(1.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
}

#[test]
fn gamma_sf_complement() {
    let g = Gamma::new(3.0_f64, 2.0).unwrap();
    for &x in &[0.1, 0.5, 1.5, 3.0, 8.0] {
        assert!((g.cdf(x) + g.sf(x) - 1.0).abs() < 1e-12, "x={x}");
    }
}

#[test]
fn gamma_quantile_roundtrip() {
    let g = Gamma::new(3.0_f64, 2.0).unwrap();
    for &p in &[0.1, 0.25, 0.5, 0.75, 0.9] {
        let x = g.quantile(p).unwrap();
        assert!((g.cdf(x) - p).abs() < 1e-8, "p={p}: cdf(quantile(p))={}", g.cdf(x));
    }
}

#[test]
fn gamma_mean_variance() {
    let g = Gamma::new(5.0_f64, 2.0).unwrap();
    assert!((g.mean() - 2.5).abs() < 1e-14);
    assert!((g.variance() - 1.25).abs() < 1e-14);
}

#[test]
fn gamma_invalid() {
    assert_eq!(Gamma::new(0.0_f64, 1.0).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Gamma::new(1.0_f64, 0.0).unwrap_err(), DistError::InvalidParameter);
}

// ======================== Beta ========================

#[test]
fn beta_uniform_case() {
    // Beta(1, 1) = Uniform(0, 1)
    let b = Beta::new(1.0_f64, 1.0).unwrap();
    assert!((b.pdf(0.5) - 1.0).abs() < 1e-14);
    assert!((b.cdf(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn beta_symmetric() {
    // Beta(2, 2): symmetric around 0.5
    let b = Beta::new(2.0_f64, 2.0).unwrap();
    assert!((b.cdf(0.5) - 0.5).abs() < 1e-12);
    assert!((b.mean() - 0.5).abs() < 1e-14);
}

#[test]
fn beta_sf_reflection() {
    let b = Beta::new(2.0_f64, 5.0).unwrap();
    for &x in &[0.05, 0.2, 0.5, 0.8, 0.95] {
        assert!((b.cdf(x) + b.sf(x) - 1.0).abs() < 1e-12, "x={x}");
    }
}

#[test]
fn beta_quantile_roundtrip() {
    let b = Beta::new(2.0_f64, 5.0).unwrap();
    for &p in &[0.1, 0.25, 0.5, 0.75, 0.9] {
        let x = b.quantile(p).unwrap();
        assert!((b.cdf(x) - p).abs() < 1e-8, "p={p}: cdf(quantile(p))={}", b.cdf(x));
    }
}

#[test]
fn beta_mean_variance() {
    let b = Beta::new(2.0_f64, 3.0).unwrap();
    assert!((b.mean() - 0.4).abs() < 1e-14);
    assert!((b.variance() - 0.04).abs() < 1e-14); // 2*3 / (25*6) = 6/150 = 0.04
}

#[test]
fn beta_invalid() {
    assert_eq!(Beta::new(0.0_f64, 1.0).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Beta::new(1.0_f64, 0.0).unwrap_err(), DistError::InvalidParameter);
}

// ======================== ChiSquared ========================

#[test]
fn chi_squared_cdf() {
    // χ²(2) CDF at x has closed form: 1 - exp(-x/2)
    let chi2 = ChiSquared::new(2.0_f64).unwrap();
    assert!((chi2.cdf(2.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
}

#[test]
fn chi_squared_quantile_roundtrip() {
    let chi2 = ChiSquared::new(5.0_f64).unwrap();
    for &p in &[0.1, 0.25, 0.5, 0.75, 0.9, 0.95] {
        let x = chi2.quantile(p).unwrap();
        assert!(
            (chi2.cdf(x) - p).abs() < 1e-8,
            "p={p}: cdf(quantile(p))={}",
            chi2.cdf(x)
        );
    }
}

#[test]
fn chi_squared_mean_variance() {
    let chi2 = ChiSquared::new(10.0_f64).unwrap();
    assert!((chi2.mean() - 10.0).abs() < 1e-14);
    assert!((chi2.variance() - 20.0).abs() < 1e-14);
}

#[test]
fn chi_squared_invalid() {
    assert_eq!(ChiSquared::new(0.0_f64).unwrap_err(), DistError::InvalidParameter);
}

// ======================== ChiSquaredQuick ========================

#[test]
fn chi_squared_quick_closed_forms() {
    // n = 2: quantile is exactly -2 ln(1-u)
    let q2 = ChiSquaredQuick::new(2).unwrap();
    assert!((q2.quantile(0.5_f64).unwrap() - 2.0 * core::f64::consts::LN_2).abs() < 1e-12);
    // n = 1: quantile is Φ⁻¹((1+u)/2)²
    let q1 = ChiSquaredQuick::new(1).unwrap();
    let x = q1.quantile(0.5_f64).unwrap();
    assert!((q1.cdf(x) - 0.5).abs() < 1e-6);
}

#[test]
fn chi_squared_quick_central_accuracy() {
    // Cornish-Fisher region: inverse should land within a small CDF error.
    // Worst case is near the regime edges at the smallest n.
    for &n in &[3u32, 5, 10, 40, 100] {
        let q = ChiSquaredQuick::new(n).unwrap();
        let tol = if n < 10 { 1e-2 } else { 1e-5 };
        for &u in &[0.05_f64, 0.25, 0.5, 0.75, 0.95] {
            let x = q.quantile(u).unwrap();
            assert!(
                (q.cdf(x) - u).abs() < tol,
                "n={n} u={u}: cdf(quantile)={}",
                q.cdf(x)
            );
        }
    }
}

#[test]
fn chi_squared_quick_n10_accuracy() {
    // Documented precision at n = 10: |cdf(quantile(u)) - u| ≤ 1e-5 across
    // the central region, both tail branches, and the regime edges.
    let q = ChiSquaredQuick::new(10).unwrap();
    for &u in &[
        0.005_f64, 0.01, 0.02, 0.03, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.97, 0.98,
        0.99, 0.995,
    ] {
        let x = q.quantile(u).unwrap();
        assert!(
            (q.cdf(x) - u).abs() <= 1e-5,
            "u={u}: cdf(quantile)={}",
            q.cdf(x)
        );
    }
}

#[test]
fn chi_squared_quick_tails() {
    // Small n tails fall back to the exact inverse
    let q = ChiSquaredQuick::new(3).unwrap();
    let exact = ChiSquared::new(3.0_f64).unwrap();
    for &u in &[0.001, 0.01, 0.99, 0.999] {
        let a = q.quantile(u).unwrap();
        let b = exact.quantile(u).unwrap();
        assert!((a - b).abs() < 1e-6, "u={u}: {a} vs {b}");
    }
    // Large n tails use the corrected Wilson-Hilferty cube
    let q = ChiSquaredQuick::new(50).unwrap();
    for &u in &[0.001_f64, 0.01, 0.99, 0.999] {
        let x = q.quantile(u).unwrap();
        assert!((q.cdf(x) - u).abs() < 1e-5, "u={u}: cdf(quantile)={}", q.cdf(x));
    }
}

#[test]
fn chi_squared_quick_boundaries() {
    let q = ChiSquaredQuick::new(5).unwrap();
    assert_eq!(q.quantile(0.0_f64).unwrap(), 0.0);
    assert_eq!(q.quantile(1.0_f64).unwrap(), f64::INFINITY);
    assert_eq!(q.quantile(-0.1_f64).unwrap_err(), DistError::InvalidArgument);
    assert_eq!(ChiSquaredQuick::<f64>::new(0).unwrap_err(), DistError::InvalidParameter);
}

// ======================== Chi ========================

#[test]
fn chi_rayleigh_case() {
    // ν = 2 is Rayleigh(1): F(x) = 1 - exp(-x²/2)
    let c = Chi::new(2).unwrap();
    for &x in &[0.5_f64, 1.0, 2.0, 3.0] {
        let expected = 1.0 - (-x * x / 2.0).exp();
        assert!((c.cdf(x) - expected).abs() < 1e-12, "x={x}");
    }
}

#[test]
fn chi_matches_chi_squared_of_square() {
    // P(X ≤ x) = P(X² ≤ x²) with X² chi-squared
    let c = Chi::new(5).unwrap();
    let chi2 = ChiSquared::new(5.0_f64).unwrap();
    for &x in &[0.5, 1.0, 2.0, 3.5] {
        assert!((c.cdf(x) - chi2.cdf(x * x)).abs() < 1e-12, "x={x}");
    }
}

#[test]
fn chi_mean_variance() {
    // ν = 2: mean = √(π/2)
    let c: Chi<f64> = Chi::new(2).unwrap();
    let expected = (core::f64::consts::PI / 2.0).sqrt();
    assert!((c.mean() - expected).abs() < 1e-10);
    assert!((c.variance() - (2.0 - expected * expected)).abs() < 1e-10);
}

#[test]
fn chi_quantile_roundtrip() {
    let c = Chi::new(3).unwrap();
    for &p in &[0.1_f64, 0.5, 0.9] {
        let x = c.quantile(p).unwrap();
        assert!((c.cdf(x) - p).abs() < 1e-8, "p={p}");
    }
}

#[test]
fn chi_mle_integer_search() {
    // Stratified sample from Chi(3): quantiles at midpoints of a uniform grid
    let c = Chi::new(3).unwrap();
    let mut sample = [0.0_f64; 50];
    for (i, s) in sample.iter_mut().enumerate() {
        *s = c.quantile((i as f64 + 0.5) / 50.0).unwrap();
    }
    assert_eq!(Chi::mle(&sample).unwrap(), 3);
    assert_eq!(
        Chi::mle(&[1.0_f64, -1.0]).unwrap_err(),
        DistError::UnsupportedSample
    );
}

#[test]
fn chi_invalid() {
    assert_eq!(Chi::<f64>::new(0).unwrap_err(), DistError::InvalidParameter);
}

// ======================== Erlang ========================

#[test]
fn erlang_matches_gamma() {
    let e = Erlang::new(3, 2.0_f64).unwrap();
    let g = Gamma::new(3.0, 2.0).unwrap();
    for &x in &[0.1, 0.5, 1.5, 4.0] {
        assert_eq!(e.pdf(x), g.pdf(x), "x={x}");
        assert_eq!(e.cdf(x), g.cdf(x), "x={x}");
    }
    assert!((e.mean() - 1.5).abs() < 1e-14);
    assert!((e.variance() - 0.75).abs() < 1e-14);
}

#[test]
fn erlang_mle_moment_match() {
    let sample = [1.0_f64, 2.0, 3.0, 2.0];
    // mean = 2, biased var = 0.5 → k = round(4/0.5) = 8, λ = 8/2 = 4
    let (k, lambda) = Erlang::mle(&sample).unwrap();
    assert_eq!(k, 8);
    assert!((lambda - 4.0).abs() < 1e-12);
}

#[test]
fn erlang_invalid() {
    assert_eq!(Erlang::new(0, 1.0_f64).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Erlang::new(1, 0.0_f64).unwrap_err(), DistError::InvalidParameter);
}

// ======================== StudentT ========================

#[test]
fn student_t_symmetric() {
    let t = StudentT::new(5.0_f64).unwrap();
    assert!((t.cdf(0.0) - 0.5).abs() < 1e-12);
    // Symmetry: cdf(-x) = 1 - cdf(x)
    assert!((t.cdf(-2.0) + t.cdf(2.0) - 1.0).abs() < 1e-12);
    assert!((t.sf(2.0) - t.cdf(-2.0)).abs() < 1e-14);
}

#[test]
fn student_t_pdf_symmetric() {
    let t = StudentT::new(5.0_f64).unwrap();
    assert!((t.pdf(-1.5) - t.pdf(1.5)).abs() < 1e-14);
}

#[test]
fn student_t_quantile_roundtrip() {
    let t = StudentT::new(10.0_f64).unwrap();
    for &p in &[0.025, 0.1, 0.25, 0.5, 0.75, 0.9, 0.975] {
        let x = t.quantile(p).unwrap();
        assert!(
            (t.cdf(x) - p).abs() < 1e-7,
            "p={p}: cdf(quantile(p))={}",
            t.cdf(x)
        );
    }
}

#[test]
fn student_t_large_df_approaches_normal() {
    let t = StudentT::new(1000.0_f64).unwrap();
    let n = Normal::new(0.0, 1.0).unwrap();
    // CDF should be very close to normal for large df
    for &x in &[-2.0, -1.0, 0.0, 1.0, 2.0] {
        assert!(
            (t.cdf(x) - n.cdf(x)).abs() < 1e-3,
            "x={x}: t={}, n={}",
            t.cdf(x),
            n.cdf(x)
        );
    }
}

#[test]
fn student_t_mean_variance() {
    let t = StudentT::new(5.0_f64).unwrap();
    assert!((t.mean()).abs() < 1e-14);
    assert!((t.variance() - 5.0 / 3.0).abs() < 1e-14);
}

#[test]
fn student_t_invalid() {
    assert_eq!(StudentT::new(0.0_f64).unwrap_err(), DistError::InvalidParameter);
}

// ======================== StudentTQuick ========================

#[test]
fn student_t_quick_cauchy() {
    // n = 1 is Cauchy: F(x) = 1/2 + atan(x)/π
    let t = StudentTQuick::new(1).unwrap();
    assert!((t.cdf(0.0_f64) - 0.5).abs() < 1e-14);
    assert!((t.cdf(1.0_f64) - 0.75).abs() < 1e-12);
    assert!((t.cdf(-1.0_f64) - 0.25).abs() < 1e-12);
}

#[test]
fn student_t_quick_two_df() {
    // n = 2: F(x) = (1 + x/√(2+x²))/2
    let t = StudentTQuick::new(2).unwrap();
    let expected = 0.5 * (1.0 + 1.0 / 3.0_f64.sqrt());
    assert!((t.cdf(1.0_f64) - expected).abs() < 1e-13);
}

#[test]
fn student_t_quick_matches_exact() {
    // Both the trig recursion (n ≤ 20) and Hill 395 (n > 20) against betainc
    for &n in &[3u32, 4, 7, 10, 20, 21, 30, 100] {
        let quick = StudentTQuick::new(n).unwrap();
        let exact = StudentT::new(n as f64).unwrap();
        for &x in &[-4.0, -1.5, -0.5, 0.0, 0.5, 1.5, 4.0, 8.0] {
            assert!(
                (quick.cdf(x) - exact.cdf(x)).abs() < 1e-4,
                "n={n} x={x}: {} vs {}",
                quick.cdf(x),
                exact.cdf(x)
            );
        }
    }
}

#[test]
fn student_t_quick_tail_series() {
    // Past the |x| > 8.01 switch the asymptotic series takes over
    for &n in &[2u32, 3, 9, 11, 1000] {
        let quick = StudentTQuick::new(n).unwrap();
        let exact = StudentT::new(n as f64).unwrap();
        for &x in &[-8.02, 8.02, 12.0, 30.0] {
            assert!(
                (quick.cdf(x) - exact.cdf(x)).abs() < 1e-7,
                "n={n} x={x}: {} vs {}",
                quick.cdf(x),
                exact.cdf(x)
            );
        }
    }
}

#[test]
fn student_t_quick_quantile() {
    // Classical table value: t_{0.975}(10) = 2.22814
    let t = StudentTQuick::new(10).unwrap();
    assert!((t.quantile(0.975_f64).unwrap() - 2.22814).abs() < 1e-3);
    assert!((t.quantile(0.5_f64).unwrap()).abs() < 1e-10);
    // Symmetry of the two-tail reduction
    let lo = t.quantile(0.025_f64).unwrap();
    let hi = t.quantile(0.975_f64).unwrap();
    assert!((lo + hi).abs() < 1e-10);
}

#[test]
fn student_t_quick_quantile_closed_forms() {
    // n = 1: quantile(3/4) = 1 exactly (Cauchy)
    let t1 = StudentTQuick::new(1).unwrap();
    assert!((t1.quantile(0.75_f64).unwrap() - 1.0).abs() < 1e-10);
    // n = 2: quantile(0.90) = √(2/(0.2·1.8) - 2)
    let t2 = StudentTQuick::new(2).unwrap();
    let expected = (2.0 / (0.2 * 1.8) - 2.0_f64).sqrt();
    assert!((t2.quantile(0.9_f64).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn student_t_quick_boundaries() {
    let t = StudentTQuick::new(5).unwrap();
    assert_eq!(t.quantile(0.0_f64).unwrap(), f64::NEG_INFINITY);
    assert_eq!(t.quantile(1.0_f64).unwrap(), f64::INFINITY);
    assert_eq!(t.quantile(1.5_f64).unwrap_err(), DistError::InvalidArgument);
    assert_eq!(StudentTQuick::<f64>::new(0).unwrap_err(), DistError::InvalidParameter);
}

// ======================== FisherF ========================

#[test]
fn fisher_f_mean_variance() {
    let f = FisherF::new(5.0_f64, 10.0).unwrap();
    assert!((f.mean() - 1.25).abs() < 1e-14);
    // 2·10²·13 / (5·8²·6) = 2600/1920
    assert!((f.variance() - 2600.0 / 1920.0).abs() < 1e-12);
}

#[test]
fn fisher_f_beta_mapping() {
    let f = FisherF::new(4.0_f64, 6.0).unwrap();
    let b = Beta::new(2.0, 3.0).unwrap();
    for &x in &[0.2, 0.5, 1.0, 2.5] {
        let y = 4.0 * x / (4.0 * x + 6.0);
        assert_eq!(f.cdf(x), b.cdf(y), "x={x}");
    }
}

#[test]
fn fisher_f_squared_t() {
    // F(1, n) is the square of t(n): P(F ≤ x) = 2·F_t(√x) − 1
    let f = FisherF::new(1.0_f64, 8.0).unwrap();
    let t = StudentT::new(8.0).unwrap();
    for &x in &[0.5_f64, 1.0, 3.0] {
        let expected = 2.0 * t.cdf(x.sqrt()) - 1.0;
        assert!((f.cdf(x) - expected).abs() < 1e-10, "x={x}");
    }
}

#[test]
fn fisher_f_quantile_roundtrip() {
    let f = FisherF::new(5.0_f64, 10.0).unwrap();
    for &p in &[0.1, 0.5, 0.9, 0.95] {
        let x = f.quantile(p).unwrap();
        assert!((f.cdf(x) - p).abs() < 1e-7, "p={p}: cdf(quantile)={}", f.cdf(x));
    }
}

#[test]
fn fisher_f_invalid() {
    assert_eq!(FisherF::new(0.0_f64, 1.0).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(FisherF::new(1.0_f64, -1.0).unwrap_err(), DistError::InvalidParameter);
}

// ======================== Bernoulli ========================

#[test]
fn bernoulli_pmf() {
    let b = Bernoulli::new(0.3_f64).unwrap();
    assert!((b.pmf(0) - 0.7).abs() < 1e-14);
    assert!((b.pmf(1) - 0.3).abs() < 1e-14);
    assert!((b.pmf(2)).abs() < 1e-14);
    assert!((b.pmf(-1)).abs() < 1e-14);
}

#[test]
fn bernoulli_cdf_negative_argument() {
    let b = Bernoulli::new(0.3_f64).unwrap();
    assert_eq!(b.cdf(-1), 0.0);
    assert!((b.cdf(0) - 0.7).abs() < 1e-14);
    assert!((b.cdf(1) - 1.0).abs() < 1e-14);
}

#[test]
fn bernoulli_sf() {
    let b = Bernoulli::new(0.4_f64).unwrap();
    // P(X ≥ k)
    assert!((b.sf(0) - 1.0).abs() < 1e-14);
    assert!((b.sf(1) - 0.4).abs() < 1e-14);
    assert!((b.sf(2)).abs() < 1e-14);
}

#[test]
fn bernoulli_quantile() {
    let b = Bernoulli::new(0.3_f64).unwrap();
    assert_eq!(b.quantile(0.5_f64).unwrap(), 0);
    assert_eq!(b.quantile(0.7_f64).unwrap(), 0);
    assert_eq!(b.quantile(0.71_f64).unwrap(), 1);
    assert_eq!(b.quantile(1.0_f64).unwrap(), 1);
}

#[test]
fn bernoulli_mean_variance() {
    let b = Bernoulli::new(0.25_f64).unwrap();
    assert!((b.mean() - 0.25).abs() < 1e-14);
    assert!((b.variance() - 0.1875).abs() < 1e-14);
}

#[test]
fn bernoulli_invalid() {
    assert_eq!(Bernoulli::new(-0.1_f64).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Bernoulli::new(1.1_f64).unwrap_err(), DistError::InvalidParameter);
}

#[test]
fn bernoulli_edge_cases() {
    let b0 = Bernoulli::new(0.0_f64).unwrap();
    assert!((b0.pmf(0) - 1.0).abs() < 1e-14);
    assert!((b0.pmf(1)).abs() < 1e-14);
    let b1 = Bernoulli::new(1.0_f64).unwrap();
    assert!((b1.pmf(0)).abs() < 1e-14);
    assert!((b1.pmf(1) - 1.0).abs() < 1e-14);
}

#[test]
fn bernoulli_mle() {
    let sample = [0.0_f64, 1.0, 1.0, 0.0, 1.0];
    assert!((Bernoulli::mle(&sample).unwrap() - 0.6).abs() < 1e-14);
    assert_eq!(
        Bernoulli::mle(&[0.0_f64, 0.5]).unwrap_err(),
        DistError::UnsupportedSample
    );
}

// ======================== Binomial ========================

#[test]
fn binomial_pmf() {
    // B(3, 0.5): P(X=0) = 1/8, P(X=1) = 3/8, P(X=2) = 3/8, P(X=3) = 1/8
    let b = Binomial::new(3, 0.5_f64).unwrap();
    assert!((b.pmf(0) - 0.125).abs() < 1e-12);
    assert!((b.pmf(1) - 0.375).abs() < 1e-12);
    assert!((b.pmf(2) - 0.375).abs() < 1e-12);
    assert!((b.pmf(3) - 0.125).abs() < 1e-12);
    assert!((b.pmf(4)).abs() < 1e-14);
    assert!((b.pmf(-1)).abs() < 1e-14);
}

#[test]
fn binomial_cdf() {
    let b = Binomial::new(3, 0.5_f64).unwrap();
    assert!((b.cdf(-1)).abs() < 1e-14);
    assert!((b.cdf(0) - 0.125).abs() < 1e-10);
    assert!((b.cdf(1) - 0.5).abs() < 1e-10);
    assert!((b.cdf(2) - 0.875).abs() < 1e-10);
    assert!((b.cdf(3) - 1.0).abs() < 1e-14);
}

#[test]
fn binomial_cdf_via_pmf_sum() {
    // Verify CDF matches sum of PMFs
    let b = Binomial::new(10, 0.3_f64).unwrap();
    for k in 0..=10 {
        let cdf = b.cdf(k);
        let pmf_sum: f64 = (0..=k).map(|j| b.pmf(j)).sum();
        assert!(
            (cdf - pmf_sum).abs() < 1e-10,
            "k={k}: cdf={cdf}, pmf_sum={pmf_sum}"
        );
    }
}

#[test]
fn binomial_sf_complement() {
    let b = Binomial::new(10, 0.3_f64).unwrap();
    for k in 0..=10 {
        assert!(
            (b.sf(k) - (1.0 - b.cdf(k - 1))).abs() < 1e-10,
            "k={k}: sf={}, 1-cdf={}",
            b.sf(k),
            1.0 - b.cdf(k - 1)
        );
    }
}

#[test]
fn binomial_quantile() {
    let b = Binomial::new(10, 0.5_f64).unwrap();
    // cdf(4) ≈ 0.377, cdf(5) ≈ 0.623
    assert_eq!(b.quantile(0.5_f64).unwrap(), 5);
    assert_eq!(b.quantile(0.0_f64).unwrap(), 0);
    assert_eq!(b.quantile(1.0_f64).unwrap(), 10);
}

#[test]
fn binomial_quantile_large_n() {
    // Trial counts past i32::MAX: the scan's first term (1-p)^n must not
    // truncate n. With n·p ≈ 0.859 the masses are Poisson-like:
    // P(0) ≈ 0.4236, P(0)+P(1) ≈ 0.7874.
    let b = Binomial::new(8_589_934_592, 1e-10_f64).unwrap();
    assert_eq!(b.quantile(0.5_f64).unwrap(), 1);
    assert_eq!(b.quantile(0.4_f64).unwrap(), 0);
    assert_eq!(b.quantile(0.9_f64).unwrap(), 2);
}

#[test]
fn binomial_mean_variance() {
    let b = Binomial::new(20, 0.3_f64).unwrap();
    assert!((b.mean() - 6.0).abs() < 1e-14);
    assert!((b.variance() - 4.2).abs() < 1e-14);
}

#[test]
fn binomial_invalid() {
    assert_eq!(Binomial::new(10, -0.1_f64).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Binomial::new(10, 1.1_f64).unwrap_err(), DistError::InvalidParameter);
}

#[test]
fn binomial_mle() {
    let sample = [2.0_f64, 3.0, 4.0, 3.0];
    // mean = 3, n = 10 → p = 0.3
    assert!((Binomial::mle_p(&sample, 10).unwrap() - 0.3).abs() < 1e-14);
    assert_eq!(
        Binomial::mle_p(&[1.5_f64, 2.0], 10).unwrap_err(),
        DistError::UnsupportedSample
    );
}

// ======================== Poisson ========================

#[test]
fn poisson_pmf() {
    let p = Poisson::new(1.0_f64).unwrap();
    // P(0) = e^{-1}
    assert!((p.pmf(0) - (-1.0_f64).exp()).abs() < 1e-14);
    // P(1) = e^{-1}
    assert!((p.pmf(1) - (-1.0_f64).exp()).abs() < 1e-14);
    // P(2) = e^{-1}/2
    assert!((p.pmf(2) - (-1.0_f64).exp() / 2.0).abs() < 1e-14);
    assert!((p.pmf(-1)).abs() < 1e-14);
}

#[test]
fn poisson_cdf() {
    let p = Poisson::new(3.0_f64).unwrap();
    // Verify CDF matches sum of PMFs
    for k in 0..15 {
        let cdf = p.cdf(k);
        let pmf_sum: f64 = (0..=k).map(|j| p.pmf(j)).sum();
        assert!(
            (cdf - pmf_sum).abs() < 1e-10,
            "k={k}: cdf={cdf}, pmf_sum={pmf_sum}"
        );
    }
}

#[test]
fn poisson_sf_complement() {
    let p = Poisson::new(4.0_f64).unwrap();
    for k in 0..12 {
        assert!(
            (p.sf(k) - (1.0 - p.cdf(k - 1))).abs() < 1e-10,
            "k={k}"
        );
    }
}

#[test]
fn poisson_quantile() {
    let p = Poisson::new(3.0_f64).unwrap();
    // cdf(2) ≈ 0.4232, cdf(3) ≈ 0.6472
    assert_eq!(p.quantile(0.5_f64).unwrap(), 3);
    assert_eq!(p.quantile(0.0_f64).unwrap(), 0);
    assert_eq!(p.quantile(0.4_f64).unwrap(), 2);
}

#[test]
fn poisson_mean_variance() {
    let p = Poisson::new(5.5_f64).unwrap();
    assert!((p.mean() - 5.5).abs() < 1e-14);
    assert!((p.variance() - 5.5).abs() < 1e-14);
}

#[test]
fn poisson_invalid() {
    assert_eq!(Poisson::new(0.0_f64).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Poisson::new(-1.0_f64).unwrap_err(), DistError::InvalidParameter);
}

#[test]
fn poisson_mle() {
    let sample = [2.0_f64, 3.0, 4.0, 3.0];
    assert!((Poisson::mle(&sample).unwrap() - 3.0).abs() < 1e-14);
}

// ======================== Geometric ========================

#[test]
fn geometric_pmf_cdf() {
    let g = Geometric::new(0.5_f64).unwrap();
    assert!((g.pmf(0) - 0.5).abs() < 1e-14);
    assert!((g.pmf(1) - 0.25).abs() < 1e-14);
    assert!((g.cdf(1) - 0.75).abs() < 1e-13);
    assert!((g.cdf(-1)).abs() < 1e-14);
    assert!((g.sf(2) - 0.25).abs() < 1e-13);
}

#[test]
fn geometric_quantile_closed_form() {
    let g = Geometric::new(0.5_f64).unwrap();
    assert_eq!(g.quantile(0.5_f64).unwrap(), 0);
    assert_eq!(g.quantile(0.75_f64).unwrap(), 1);
    assert_eq!(g.quantile(0.76_f64).unwrap(), 2);
    assert_eq!(g.quantile(0.0_f64).unwrap(), 0);
    // quantile is the smallest k with cdf(k) ≥ p
    for &p in &[0.1, 0.3, 0.6, 0.9, 0.99, 0.9999] {
        let k = g.quantile(p).unwrap();
        assert!(g.cdf(k) >= p, "p={p} k={k}");
        assert!(k == 0 || g.cdf(k - 1) < p, "p={p} k={k}");
    }
}

#[test]
fn geometric_mean_variance() {
    let g = Geometric::new(0.5_f64).unwrap();
    assert!((g.mean() - 1.0).abs() < 1e-14);
    assert!((g.variance() - 2.0).abs() < 1e-14);
}

#[test]
fn geometric_invalid() {
    assert_eq!(Geometric::new(0.0_f64).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Geometric::new(1.0_f64).unwrap_err(), DistError::InvalidParameter);
}

#[test]
fn geometric_mle() {
    let sample = [0.0_f64, 1.0, 2.0, 3.0];
    // mean = 1.5 → p = 1/2.5 = 0.4
    assert!((Geometric::mle(&sample).unwrap() - 0.4).abs() < 1e-14);
}

// ======================== NegativeBinomial ========================

#[test]
fn neg_binomial_geometric_case() {
    // NB(1, p) is Geometric(p)
    let nb = NegativeBinomial::new(1.0_f64, 0.5).unwrap();
    let g = Geometric::new(0.5_f64).unwrap();
    for k in 0..8 {
        assert!((nb.pmf(k) - g.pmf(k)).abs() < 1e-12, "k={k}");
        assert!((nb.cdf(k) - g.cdf(k)).abs() < 1e-10, "k={k}");
    }
}

#[test]
fn neg_binomial_cdf_via_pmf_sum() {
    let nb = NegativeBinomial::new(2.5_f64, 0.4).unwrap();
    for k in 0..20 {
        let cdf = nb.cdf(k);
        let pmf_sum: f64 = (0..=k).map(|j| nb.pmf(j)).sum();
        assert!(
            (cdf - pmf_sum).abs() < 1e-10,
            "k={k}: cdf={cdf}, pmf_sum={pmf_sum}"
        );
    }
}

#[test]
fn neg_binomial_sf_complement() {
    let nb = NegativeBinomial::new(3.0_f64, 0.6).unwrap();
    for k in 0..15 {
        assert!(
            (nb.sf(k) - (1.0 - nb.cdf(k - 1))).abs() < 1e-10,
            "k={k}"
        );
    }
}

#[test]
fn neg_binomial_quantile() {
    let nb = NegativeBinomial::new(5.0_f64, 0.5).unwrap();
    for &p in &[0.1, 0.5, 0.9] {
        let k = nb.quantile(p).unwrap();
        assert!(nb.cdf(k) >= p, "p={p} k={k}");
        assert!(k == 0 || nb.cdf(k - 1) < p, "p={p} k={k}");
    }
}

#[test]
fn neg_binomial_mean_variance() {
    let nb = NegativeBinomial::new(5.0_f64, 0.5).unwrap();
    assert!((nb.mean() - 5.0).abs() < 1e-14);
    assert!((nb.variance() - 10.0).abs() < 1e-14);
}

#[test]
fn neg_binomial_mle() {
    // Overdispersed count sample (variance > mean)
    let sample = [0.0_f64, 1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0];
    let (r, p) = NegativeBinomial::mle(&sample).unwrap();
    assert!(r > 0.0 && r.is_finite(), "r={r}");
    assert!(p > 0.0 && p < 1.0, "p={p}");
    // p̂ = r̂/(r̂ + x̄) by construction
    assert!((p - r / (r + 2.75)).abs() < 1e-10);
}

#[test]
fn neg_binomial_mle_underdispersed() {
    // mean ≥ variance: no interior maximum
    let sample = [1.0_f64, 2.0, 3.0, 2.0, 1.0, 3.0];
    assert_eq!(
        NegativeBinomial::mle(&sample).unwrap_err(),
        DistError::UnsupportedSample
    );
}

#[test]
fn neg_binomial_invalid() {
    assert_eq!(
        NegativeBinomial::new(0.0_f64, 0.5).unwrap_err(),
        DistError::InvalidParameter
    );
    assert_eq!(
        NegativeBinomial::new(1.0_f64, 1.0).unwrap_err(),
        DistError::InvalidParameter
    );
}

// ======================== Pascal ========================

#[test]
fn pascal_matches_neg_binomial() {
    let pa = Pascal::new(3, 0.4_f64).unwrap();
    let nb = NegativeBinomial::new(3.0_f64, 0.4).unwrap();
    for k in 0..10 {
        assert_eq!(pa.pmf(k), nb.pmf(k), "k={k}");
        assert_eq!(pa.cdf(k), nb.cdf(k), "k={k}");
    }
    assert!((pa.mean() - 4.5).abs() < 1e-14);
}

#[test]
fn pascal_mle_rounds_to_integer() {
    let sample = [0.0_f64, 1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0];
    let (n, p) = Pascal::mle(&sample).unwrap();
    assert!(n >= 1);
    assert!(p > 0.0 && p < 1.0);
    let nf = n as f64;
    assert!((p - nf / (nf + 2.75)).abs() < 1e-10);
}

#[test]
fn pascal_mle_underdispersed() {
    let sample = [1.0_f64, 2.0, 3.0, 2.0, 1.0, 3.0];
    assert_eq!(Pascal::mle(&sample).unwrap_err(), DistError::UnsupportedSample);
}

#[test]
fn pascal_invalid() {
    assert_eq!(Pascal::new(0, 0.5_f64).unwrap_err(), DistError::InvalidParameter);
}

// ======================== Logarithmic ========================

#[test]
fn logarithmic_pmf() {
    let d = Logarithmic::new(0.5_f64).unwrap();
    let t = 1.0 / core::f64::consts::LN_2;
    assert!((d.pmf(1) - 0.5 * t).abs() < 1e-14);
    assert!((d.pmf(2) - 0.125 * t).abs() < 1e-14);
    assert!((d.pmf(0)).abs() < 1e-14);
}

#[test]
fn logarithmic_cdf_via_pmf_sum() {
    let d = Logarithmic::new(0.6_f64).unwrap();
    for k in 1..15 {
        let cdf = d.cdf(k);
        let pmf_sum: f64 = (1..=k).map(|j| d.pmf(j)).sum();
        assert!(
            (cdf - pmf_sum).abs() < 1e-12,
            "k={k}: cdf={cdf}, pmf_sum={pmf_sum}"
        );
    }
}

#[test]
fn logarithmic_sf() {
    let d = Logarithmic::new(0.5_f64).unwrap();
    assert!((d.sf(1) - 1.0).abs() < 1e-14);
    assert!((d.sf(2) - (1.0 - d.pmf(1))).abs() < 1e-12);
}

#[test]
fn logarithmic_quantile() {
    let d = Logarithmic::new(0.5_f64).unwrap();
    // pmf(1) ≈ 0.721 already covers the median
    assert_eq!(d.quantile(0.5_f64).unwrap(), 1);
    for &p in &[0.1, 0.8, 0.95, 0.99] {
        let k = d.quantile(p).unwrap();
        assert!(d.cdf(k) >= p, "p={p} k={k}");
        assert!(k == 1 || d.cdf(k - 1) < p, "p={p} k={k}");
    }
}

#[test]
fn logarithmic_mean_variance() {
    let d = Logarithmic::new(0.5_f64).unwrap();
    let ln2 = core::f64::consts::LN_2;
    // mean = -θ/((1-θ) ln(1-θ)) = 1/ln 2
    assert!((d.mean() - 1.0 / ln2).abs() < 1e-14);
    let expected_var = -0.5 * (0.5 - ln2) / (0.25 * ln2 * ln2);
    assert!((d.variance() - expected_var).abs() < 1e-12);
}

#[test]
fn logarithmic_mle() {
    let sample = [1.0_f64, 1.0, 1.0, 3.0, 3.0];
    let theta = Logarithmic::mle(&sample).unwrap();
    assert!(theta > 0.0 && theta < 1.0);
    // The fitted distribution reproduces the sample mean
    let d = Logarithmic::new(theta).unwrap();
    assert!((d.mean() - 1.8).abs() < 1e-7);
    // All-ones sample has mean 1: unreachable by the model
    assert_eq!(
        Logarithmic::mle(&[1.0_f64, 1.0]).unwrap_err(),
        DistError::UnsupportedSample
    );
}

#[test]
fn logarithmic_invalid() {
    assert_eq!(Logarithmic::new(0.0_f64).unwrap_err(), DistError::InvalidParameter);
    assert_eq!(Logarithmic::new(1.0_f64).unwrap_err(), DistError::InvalidParameter);
}

// ======================== UniformInt ========================

#[test]
fn uniform_int_die() {
    let d = UniformInt::<f64>::new(1, 6).unwrap();
    assert!((d.pmf(3) - 1.0 / 6.0).abs() < 1e-14);
    assert!((d.pmf(0)).abs() < 1e-14);
    assert!((d.pmf(7)).abs() < 1e-14);
    assert!((d.cdf(3) - 0.5).abs() < 1e-14);
    assert!((d.mean() - 3.5).abs() < 1e-14);
    assert!((d.variance() - 35.0 / 12.0).abs() < 1e-12);
}

#[test]
fn uniform_int_quantile_near_one() {
    // Probabilities just below 1 must still return the upper endpoint
    let d = UniformInt::<f64>::new(1, 6).unwrap();
    assert_eq!(d.quantile(0.999999_f64).unwrap(), 6);
    assert_eq!(d.quantile(1.0_f64).unwrap(), 6);
    assert_eq!(d.quantile(0.0_f64).unwrap(), 1);
    for &p in &[0.1, 0.17, 0.34, 0.5, 0.51, 0.84] {
        let k = d.quantile(p).unwrap();
        assert!(d.cdf(k) >= p, "p={p} k={k}");
        assert!(k == 1 || d.cdf(k - 1) < p, "p={p} k={k}");
    }
}

#[test]
fn uniform_int_sf() {
    let d = UniformInt::<f64>::new(1, 4).unwrap();
    assert!((d.sf(1) - 1.0).abs() < 1e-14);
    assert!((d.sf(3) - 0.5).abs() < 1e-14);
    assert!((d.sf(5)).abs() < 1e-14);
}

#[test]
fn uniform_int_single_point() {
    let d = UniformInt::<f64>::new(2, 2).unwrap();
    assert!((d.pmf(2) - 1.0).abs() < 1e-14);
    assert_eq!(d.quantile(0.5_f64).unwrap(), 2);
}

#[test]
fn uniform_int_mle() {
    let sample = [2.0_f64, 5.0, 3.0, 1.0];
    let (i, j) = UniformInt::<f64>::mle(&sample).unwrap();
    assert_eq!(i, 1);
    assert_eq!(j, 5);
}

#[test]
fn uniform_int_invalid() {
    assert_eq!(UniformInt::<f64>::new(3, 2).unwrap_err(), DistError::InvalidParameter);
}

// ======================== Cross-distribution ========================

#[test]
fn gamma_exponential_equivalence() {
    // Gamma(1, λ) = Exponential(λ)
    let g = Gamma::new(1.0_f64, 2.0).unwrap();
    let e = Exponential::new(2.0).unwrap();
    for &x in &[0.0, 0.5, 1.0, 2.0, 5.0] {
        assert!(
            (g.pdf(x) - e.pdf(x)).abs() < 1e-12,
            "pdf at {x}: {} vs {}",
            g.pdf(x),
            e.pdf(x)
        );
        assert!(
            (g.cdf(x) - e.cdf(x)).abs() < 1e-12,
            "cdf at {x}: {} vs {}",
            g.cdf(x),
            e.cdf(x)
        );
    }
}

#[test]
fn chi_squared_gamma_equivalence() {
    // χ²(k) = Gamma(k/2, 1/2)
    let chi2 = ChiSquared::new(6.0_f64).unwrap();
    let g = Gamma::new(3.0, 0.5).unwrap();
    for &x in &[1.0, 3.0, 5.0, 10.0] {
        assert!(
            (chi2.pdf(x) - g.pdf(x)).abs() < 1e-12,
            "pdf at {x}: {} vs {}",
            chi2.pdf(x),
            g.pdf(x)
        );
        assert!(
            (chi2.cdf(x) - g.cdf(x)).abs() < 1e-12,
            "cdf at {x}: {} vs {}",
            chi2.cdf(x),
            g.cdf(x)
        );
    }
}

#[test]
fn error_display() {
    let s = format!("{}", DistError::InvalidParameter);
    assert!(s.contains("parameter"));
    let s = format!("{}", DistError::InvalidArgument);
    assert!(s.contains("input"));
    let s = format!("{}", DistError::UnsupportedSample);
    assert!(s.contains("sample"));
}
