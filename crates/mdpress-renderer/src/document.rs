//! Static HTML5 document shell.

/// Fixed `lang` attribute of the generated page.
const LANG: &str = "ru";

/// Static page title.
const TITLE: &str = "Post";

/// Wraps a transformed body in the fixed HTML5 document template.
///
/// A plain formatting step with no parameters beyond the body string and no
/// error conditions.
pub struct DocumentShell;

impl DocumentShell {
    /// Produce the standalone HTML page for the given body.
    #[must_use]
    pub fn wrap(body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"{LANG}\">\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <title>{TITLE}</title>\n\
             </head>\n\
             <body>\n\
             {body}\n\
             </body>\n\
             </html>"
        )
    }
}
