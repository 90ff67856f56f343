use franchise_macros::value_object;

#[value_object]
struct Quantity(u32);

#[value_object]
#[derive(Copy, PartialOrd, Ord)]
struct Level {
    value: i64,
}

#[value_object(debug = false)]
struct Opaque(i32);

#[value_object]
enum Mode {
    Fast,
    Slow,
}

fn main() {
    let _ = format!("{:?}", Quantity(1));
    assert_eq!(Quantity(2).clone(), Quantity(2));

    let a = Level { value: 1 };
    let b = a;
    assert!(Level { value: 2 } > b);

    let _ = Opaque(1);

    let json = serde_json::to_string(&Mode::Fast).unwrap();
    let back: Mode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Mode::Fast);
    assert_ne!(Mode::Slow, Mode::Fast);
}
