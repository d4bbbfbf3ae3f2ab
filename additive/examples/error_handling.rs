use additive::{Additive, ValidationError};

#[derive(Additive, Debug, Clone, PartialEq)]
struct Registration {
    username: String,
    email: String,
    #[additive(default = "pending")]
    status: String,
}

fn main() {
    println!("=== Error Handling Example ===\n");

    // Successful registration
    println!("1. Successful registration:");
    match Registration::new("alice".to_string(), "alice@example.com".to_string()) {
        Ok(reg) => println!("   Success: {:?}\n", reg),
        Err(e) => println!("   Error: {}\n", e),
    }

    // Null mandatory field, rejected at the constructor
    println!("2. Null username:");
    match Registration::new(None, "bob@example.com".to_string()) {
        Ok(reg) => println!("   Success: {:?}\n", reg),
        Err(e) => println!("   Error: {}\n", e),
    }

    // Null set on a non-nullable field, rejected at build time
    println!("3. Null status via the builder:");
    let reg = Registration::new("carol".to_string(), "carol@example.com".to_string())
        .expect("Failed to create registration");
    match reg.copy(|b| {
        b.set_status(None);
    }) {
        Ok(copy) => println!("   Success: {:?}\n", copy),
        Err(e) => println!("   Error: {}\n", e),
    }

    // The two checkpoints are distinguishable at the call site
    println!("4. Matching on the checkpoint:");
    let result = Registration::with("dave".to_string(), "dave@example.com".to_string(), |b| {
        b.set_status(None);
    });
    match result {
        Ok(reg) => println!("   Created: {:?}\n", reg),
        Err(ValidationError::NullArgument(field)) => {
            println!("   Constructor rejected `{}`\n", field)
        }
        Err(ValidationError::NullField(field)) => {
            println!("   Build step rejected `{}`\n", field)
        }
    }

    // Using Result propagation with ?
    println!("5. Using Result propagation:");
    match create_registration() {
        Ok(reg) => println!("   Created registration: {:?}", reg),
        Err(e) => println!("   Failed: {}", e),
    }
}

fn create_registration() -> Result<Registration, ValidationError> {
    let reg = Registration::new("eve".to_string(), "eve@example.com".to_string())?;
    reg.copy(|b| {
        b.set_status("active".to_string());
    })
}
