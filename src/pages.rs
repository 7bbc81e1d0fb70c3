use time::macros::format_description;
use time::OffsetDateTime;

/// Minimal HTML entity escape for values interpolated into pages.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Home page: greeting with the current weekday and 12-hour clock, plus the
/// signup form posting to `/submit`.
pub fn home_page() -> String {
    // The local offset is indeterminate on some platforms; UTC is close
    // enough for a greeting.
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let weekday = now.weekday();
    let clock = now
        .format(format_description!("[hour repr:12]:[minute] [period]"))
        .unwrap_or_else(|_| "--:--".into());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Sign Up</title>
</head>
<body style="font-family: Arial; margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);">
    <div style="background: white; border-radius: 12px; padding: 40px; width: 340px; text-align: center; box-shadow: 0 10px 30px rgba(0,0,0,0.2);">
        <h1 style="margin-top: 0;">Create your account</h1>
        <p style="color: #555;">Happy {weekday}! It is {clock}.</p>
        <form action="/submit" method="post">
            <input type="text" name="name" placeholder="Name" style="width: 100%; box-sizing: border-box; margin: 6px 0; padding: 10px; border: 1px solid #ccc; border-radius: 6px;">
            <input type="email" name="email" placeholder="Email" style="width: 100%; box-sizing: border-box; margin: 6px 0; padding: 10px; border: 1px solid #ccc; border-radius: 6px;">
            <input type="password" name="password" placeholder="Password" style="width: 100%; box-sizing: border-box; margin: 6px 0; padding: 10px; border: 1px solid #ccc; border-radius: 6px;">
            <input type="password" name="confirm_password" placeholder="Confirm password" style="width: 100%; box-sizing: border-box; margin: 6px 0; padding: 10px; border: 1px solid #ccc; border-radius: 6px;">
            <button type="submit" style="width: 100%; margin-top: 10px; padding: 12px; border: none; border-radius: 6px; background: #667eea; color: white; font-size: 16px; cursor: pointer;">Sign Up</button>
        </form>
    </div>
</body>
</html>
"#
    )
}

/// Confirmation page shown after a successful signup. Shows the name and
/// email only, never the stored hash.
pub fn success_page(name: &str, email: &str) -> String {
    let name = escape(name);
    let email = escape(email);
    format!(
        r#"<html>
<body style="font-family: Arial; text-align: center; padding: 50px;">
    <h2>✅ Welcome, {name}!</h2>
    <p>Your account has been registered with the email <strong>{email}</strong>.</p>
    <a href="/" style="color: #667eea; text-decoration: none;">← Go Back</a>
</body>
</html>
"#
    )
}

/// Error page with the shape the reference pages used: a single heading and
/// a link back to the form.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<html>
<body style="font-family: Arial; text-align: center; padding: 50px;">
    <h2>❌ {message}</h2>
    <a href="/" style="color: #667eea; text-decoration: none;">← Go Back</a>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_renders_the_signup_form() {
        let page = home_page();
        assert!(page.contains(r#"action="/submit""#));
        assert!(page.contains(r#"name="name""#));
        assert!(page.contains(r#"name="email""#));
        assert!(page.contains(r#"name="password""#));
        assert!(page.contains(r#"name="confirm_password""#));
        // AM/PM clock, never 24-hour
        assert!(page.contains("AM") || page.contains("PM"));
    }

    #[test]
    fn success_page_shows_name_and_email() {
        let page = success_page("Alice", "alice@example.com");
        assert!(page.contains("Alice"));
        assert!(page.contains("alice@example.com"));
    }

    #[test]
    fn success_page_escapes_markup_in_user_values() {
        let page = success_page("<script>", "a@b.c");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn error_page_carries_the_message() {
        let page = error_page("Passwords do not match!");
        assert!(page.contains("Passwords do not match!"));
        assert!(page.contains("Go Back"));
    }
}
