use additive::Additive;

#[derive(Additive, Debug, Clone, PartialEq)]
struct User {
    username: String,
    email: String,
    #[additive(default = "en")]
    locale: String,
    #[additive(default)]
    display_name: Option<String>,
}

fn main() {
    println!("=== Basic Usage Example ===\n");

    // Mandatory fields ride the constructor; everything else defaults.
    let user = User::new("alice".to_string(), "alice@example.com".to_string())
        .expect("Failed to create user");

    println!("Created: {:?}", user);

    // Customize defaults at construction time with a builder callback.
    let localized = User::with(
        "bob".to_string(),
        "bob@example.com".to_string(),
        |b| {
            b.set_locale("fr".to_string());
            b.set_display_name("Bob".to_string());
        },
    )
    .expect("Failed to create user");

    println!("\nCustomized: {:?}", localized);

    // `copy` produces a modified clone; the source is untouched.
    let renamed = user
        .copy(|b| {
            b.set_display_name("Alice".to_string());
        })
        .expect("Failed to copy user");

    println!("\nCopy: {:?}", renamed);
    println!("Source after copy: {:?}", user);
}
