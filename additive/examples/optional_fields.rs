use additive::Additive;

// One field per construction category.
#[derive(Additive, Debug, Clone, PartialEq)]
struct Profile {
    // Mandatory, non-nullable: must be supplied, never null.
    username: String,
    // Mandatory, nullable: must be supplied, null is a legal value.
    referrer: Option<String>,
    // Optional, non-nullable: falls back to its default when omitted.
    #[additive(default = "member")]
    role: String,
    // Optional, nullable: defaults to null; explicitly settable later.
    #[additive(default)]
    bio: Option<String>,
}

fn main() {
    println!("=== Optional Fields Example ===\n");

    // Only the mandatory fields appear in the constructor call.
    let minimal = Profile::new("alice".to_string(), None).expect("Failed to create profile");
    println!("Minimal profile: {:?}", minimal);

    // A mandatory nullable field accepts a value just as well as null.
    let referred = Profile::new("bob".to_string(), "alice".to_string())
        .expect("Failed to create profile");
    println!("\nReferred profile: {:?}", referred);

    // Optional fields are reachable through `with` or `copy`.
    let complete = Profile::with("carol".to_string(), None, |b| {
        b.set_role("admin".to_string());
        b.set_bio("Keeps the lights on.".to_string());
    })
    .expect("Failed to create profile");
    println!("\nComplete profile: {:?}", complete);

    // Adding a new defaulted field to Profile later would change none of
    // the call sites above; the construction surface grows additively.
    let demoted = complete
        .copy(|b| {
            b.set_role("member".to_string());
            b.set_bio(None);
        })
        .expect("Failed to copy profile");
    println!("\nDemoted copy: {:?}", demoted);
}
