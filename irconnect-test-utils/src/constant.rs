/// Plaintext password shared by every fixture account.
pub static TEST_PASSWORD: &str = "correct-horse-battery";

/// Domain appended to fixture usernames to form unique email addresses.
pub static TEST_EMAIL_DOMAIN: &str = "example.com";
