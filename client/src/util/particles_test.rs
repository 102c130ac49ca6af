use super::*;

#[test]
fn same_seed_generates_same_field() {
    let field = ParticleField::section(15, 7);
    assert_eq!(field.generate(), field.generate());
}

#[test]
fn different_seeds_differ() {
    let a = ParticleField::section(15, 1).generate();
    let b = ParticleField::section(15, 2).generate();
    assert_ne!(a, b);
}

#[test]
fn particles_stay_within_configured_ranges() {
    let field = ParticleField::hero(42);
    let particles = field.generate();
    assert_eq!(particles.len(), 25);
    for p in &particles {
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((5.0..15.0).contains(&p.size_px));
        assert!((10.0..20.0).contains(&p.duration_s));
        assert!((0.0..5.0).contains(&p.delay_s));
        assert_eq!(p.drift_px.abs(), 15.0);
    }
}

#[test]
fn colors_and_drift_alternate_by_index() {
    let particles = ParticleField::section(6, 3).generate();
    assert_eq!(particles[0].color, "#3b82f6");
    assert_eq!(particles[1].color, "#10b981");
    assert_eq!(particles[2].color, "#8b5cf6");
    assert_eq!(particles[3].color, "#3b82f6");
    assert!(particles[0].drift_px > 0.0);
    assert!(particles[1].drift_px < 0.0);
}

#[test]
fn zero_count_is_empty() {
    assert!(ParticleField::section(0, 1).generate().is_empty());
}

#[test]
fn style_includes_position_and_timing() {
    let p = Particle {
        top_pct: 10.0,
        left_pct: 20.5,
        size_px: 6.0,
        color: "#10b981",
        drift_px: -10.0,
        duration_s: 8.0,
        delay_s: 1.5,
    };
    let style = p.style();
    assert!(style.contains("top:10.00%"));
    assert!(style.contains("left:20.50%"));
    assert!(style.contains("width:6.0px"));
    assert!(style.contains("background:#10b981"));
    assert!(style.contains("--drift:-10px"));
    assert!(style.contains("animation-delay:1.50s"));
}
