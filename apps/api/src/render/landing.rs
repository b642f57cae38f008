use crate::models::resume::TemplateKind;
use crate::render::html::escape;

/// The start screen: what the builder does and where to go next.
pub fn render_landing() -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Vitae - Resume Builder</title>\n\
         <style>body { font-family: 'Inter', Arial, sans-serif; max-width: 720px; \
         margin: 48px auto; padding: 0 16px; color: #1f2937; } \
         a.button { display: inline-block; margin-right: 12px; padding: 8px 16px; \
         border-radius: 6px; background: #2563eb; color: #fff; text-decoration: none; }</style>\n\
         </head>\n<body>\n",
    );
    html.push_str("<h1>Build a resume that gets noticed</h1>\n");
    html.push_str(
        "<p>Fill in six short steps, get writing suggestions for every section, \
         and switch between templates with a live preview.</p>\n",
    );
    html.push_str("<h2>Templates</h2>\n<ul>\n");
    for kind in TemplateKind::ALL {
        html.push_str(&format!("<li>{}</li>\n", escape(kind.label())));
    }
    html.push_str("</ul>\n<p>\n");
    html.push_str("<a class=\"button\" href=\"/build\">Start building</a>\n");
    html.push_str("<a class=\"button\" href=\"/build?demo=true\">Try the demo</a>\n");
    html.push_str("<a class=\"button\" href=\"/preview\">Preview</a>\n");
    html.push_str("</p>\n</body>\n</html>\n");
    html
}
