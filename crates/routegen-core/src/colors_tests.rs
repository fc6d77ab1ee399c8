use crate::Colors;

#[test]
fn off_writes_nothing() {
    let c = Colors::new(false);
    assert_eq!(format!("{}{}{}{}", c.name, c.literal, c.dim, c.reset), "");
}

#[test]
fn on_uses_basic_ansi_codes() {
    let c = Colors::new(true);
    assert_eq!(c.name, "\x1b[34m");
    assert_eq!(c.literal, "\x1b[32m");
    assert_eq!(c.dim, "\x1b[2m");
    assert_eq!(c.reset, "\x1b[0m");
}
