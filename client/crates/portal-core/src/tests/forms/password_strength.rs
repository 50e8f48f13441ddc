use crate::PasswordStrength;

#[test]
fn test_strength_scores() {
    assert_eq!(PasswordStrength::score("").value(), 0);
    assert_eq!(PasswordStrength::score("abcdefgh").value(), 1);
    assert_eq!(PasswordStrength::score("Abcdefgh").value(), 2);
    assert_eq!(PasswordStrength::score("Abcdefg1").value(), 3);
    assert_eq!(PasswordStrength::score("Abcdef1!").value(), 4);
}

#[test]
fn test_strength_labels() {
    assert_eq!(PasswordStrength::score("abc").label(), "weak");
    assert_eq!(PasswordStrength::score("Abcdefgh").label(), "moderate");
    assert_eq!(PasswordStrength::score("Abcdef1!").label(), "strong");
}
