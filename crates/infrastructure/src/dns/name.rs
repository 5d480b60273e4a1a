use hickory_proto::rr::Name;

/// Presentation form of `name` without the trailing root dot.
///
/// Label escapes (`\.`, `\\`, `\DDD`) are kept as hickory renders them, and the
/// root name becomes the empty string.
pub fn render_name(name: &Name) -> String {
    let mut rendered = name.to_ascii();
    if name.is_fqdn() && rendered.ends_with('.') {
        rendered.pop();
    }
    rendered
}
