use teloxide::types::Message;

// e.g. "Jane Doe (@jane)", "Jane", "@jane"
pub fn format_user_name(first_name: &str, last_name: Option<&str>, username: Option<&str>) -> String {
  let mut name = [Some(first_name), last_name]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ");

  if let Some(username) = username.filter(|u| !u.is_empty()) {
    if name.is_empty() {
      name = format!("@{}", username);
    } else {
      name = format!("{} (@{})", name, username);
    }
  }

  if name.is_empty() {
    return "unknown user".to_string();
  }

  name
}

pub fn user_name(msg: &Message) -> String {
  match msg.from.as_ref() {
    Some(user) => format_user_name(
      &user.first_name,
      user.last_name.as_deref(),
      user.username.as_deref(),
    ),
    None => format!("chat {}", msg.chat.id),
  }
}
