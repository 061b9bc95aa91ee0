use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn default_palette_parses() {
    let p = Palette::from_def(&PaletteDef::default()).unwrap();
    assert_eq!(p.particle_colors().len(), 4);
    assert!(p.background().b < 5.0);
}

#[test]
fn empty_particle_colors_rejected() {
    let def = PaletteDef {
        particle_colors: vec![],
        ..PaletteDef::default()
    };
    let err = Palette::from_def(&def).unwrap_err();
    assert!(err.to_string().contains("at least one particle color"));
}

#[test]
fn bad_color_names_its_index() {
    let def = PaletteDef {
        particle_colors: vec!["#ffffff".to_owned(), "nope".to_owned()],
        ..PaletteDef::default()
    };
    let err = Palette::from_def(&def).unwrap_err();
    assert!(err.to_string().contains("particle color 1"));
}

#[test]
fn pick_only_returns_palette_colors() {
    let p = Palette::from_def(&PaletteDef::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..64 {
        let c = p.pick(&mut rng);
        assert!(p.particle_colors().contains(&c));
    }
}
