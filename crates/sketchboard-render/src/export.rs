//! Export of a rendered bitmap as a standalone HTML document.

use crate::pixmap::Snapshot;
use crate::renderer::RenderResult;
use base64::{Engine, engine::general_purpose::STANDARD};

/// Suggested file name for the exported document.
pub const EXPORT_FILE_NAME: &str = "exported_drawing.html";

/// Encode the bitmap as a `data:image/png;base64,...` URL.
pub fn to_data_url(snapshot: &Snapshot) -> RenderResult<String> {
    let png = snapshot.encode_png()?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Build an HTML page that embeds the bitmap inline.
pub fn html_document(snapshot: &Snapshot) -> RenderResult<String> {
    let data_url = to_data_url(snapshot)?;
    log::info!(
        "Exporting {}x{} drawing ({} bytes of image data)",
        snapshot.width,
        snapshot.height,
        data_url.len()
    );
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Exported Drawing</title>
</head>
<body>
    <img src="{data_url}" alt="Exported Drawing">
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::PixmapSurface;

    #[test]
    fn test_data_url_decodes_to_png() {
        let snapshot = PixmapSurface::new(4, 4).unwrap().snapshot();
        let url = to_data_url(&snapshot).unwrap();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        assert_eq!(bytes, snapshot.encode_png().unwrap());
    }

    #[test]
    fn test_html_document_embeds_image() {
        let snapshot = PixmapSurface::new(4, 4).unwrap().snapshot();
        let html = html_document(&snapshot).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Exported Drawing</title>"));
        assert!(html.contains(r#"<img src="data:image/png;base64,"#));
    }
}
