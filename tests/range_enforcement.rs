use genmdm::{Parameter, Patch, PatchError, ValidationMode};

#[test]
fn strict_mode_rejects_out_of_range() {
    for parameter in Parameter::all() {
        let size = parameter.size() as i32;
        let mut patch = Patch::new();

        for bad in [size, -1] {
            let err = patch.set(parameter, bad).unwrap_err();
            assert!(matches!(err, PatchError::Range { .. }), "{}", parameter.name());
            assert_eq!(
                err.to_string(),
                format!(
                    "{} must be in range of 0 and {}. got {}",
                    parameter.name(),
                    size - 1,
                    bad
                )
            );
        }

        for good in [size - 1, 0] {
            patch.set(parameter, good).unwrap();
            assert_eq!(patch.get(parameter), Some(good as u8));
        }
    }
}

#[test]
fn clamp_mode_never_fails() {
    for parameter in Parameter::all() {
        let mut patch = Patch::with_mode(ValidationMode::Clamp);

        patch.set(parameter, parameter.size() as i32 + 50).unwrap();
        assert_eq!(patch.get(parameter), Some(parameter.max()));

        patch.set(parameter, -7).unwrap();
        assert_eq!(patch.get(parameter), Some(0));
    }
}
