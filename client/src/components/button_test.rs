use super::*;

const VARIANTS: [ButtonVariant; 4] =
    [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Danger, ButtonVariant::Outline];

#[test]
fn default_variant_is_primary() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn variant_classes_are_distinct() {
    for (i, a) in VARIANTS.iter().enumerate() {
        for (j, b) in VARIANTS.iter().enumerate() {
            if i != j {
                assert_ne!(a.class(), b.class());
            }
        }
    }
}

#[test]
fn button_class_keeps_base_and_appends_overrides() {
    for variant in VARIANTS {
        let class = button_class(variant, "");
        assert!(class.starts_with(BASE_CLASS));
        assert!(class.ends_with(variant.class()));
    }

    let class = button_class(ButtonVariant::Primary, "py-2 px-6 text-xs");
    assert!(class.ends_with(" py-2 px-6 text-xs"));
}
