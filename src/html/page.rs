//! Single-file HTML gallery

use std::fs;
use std::path::{Path, PathBuf};

use super::{escape_html, IndexBuilder};
use crate::config::IMAGE_DIR_NAME;
use crate::error::{Error, Result};

const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq)]
enum Section {
    Header(String),
    Row { cells: Vec<Cell>, width: u32 },
}

#[derive(Debug, Clone, PartialEq)]
struct Cell {
    image: String,
    caption: String,
    link: String,
}

/// Gallery page backed by `{web_dir}/index.html`
///
/// Image paths registered through [`IndexBuilder`] are relative to
/// `{web_dir}/images`.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    web_dir: PathBuf,
    image_dir: PathBuf,
    refresh: u32,
    sections: Vec<Section>,
}

impl HtmlPage {
    /// Create the page and its image directory
    ///
    /// A non-zero `refresh` makes browsers reload the page every `refresh` seconds.
    pub fn new(web_dir: impl AsRef<Path>, title: impl Into<String>, refresh: u32) -> Result<Self> {
        let web_dir = web_dir.as_ref().to_path_buf();
        let image_dir = web_dir.join(IMAGE_DIR_NAME);
        fs::create_dir_all(&image_dir).map_err(|e| {
            Error::io(format!("creating gallery directory {}", image_dir.display()), e)
        })?;

        Ok(Self { title: title.into(), web_dir, image_dir, refresh, sections: Vec::new() })
    }

    /// Directory images should be written to
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    pub fn web_dir(&self) -> &Path {
        &self.web_dir
    }

    /// Number of headers added so far
    pub fn header_count(&self) -> usize {
        self.sections.iter().filter(|s| matches!(s, Section::Header(_))).count()
    }

    /// Render the full document
    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        if self.refresh > 0 {
            html.push_str(&format!("<meta http-equiv=\"refresh\" content=\"{}\">\n", self.refresh));
        }
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str("</head>\n<body>\n");

        for section in &self.sections {
            match section {
                Section::Header(text) => {
                    html.push_str(&format!("<h3>{}</h3>\n", escape_html(text)));
                }
                Section::Row { cells, width } => {
                    html.push_str("<table style=\"table-layout: fixed;\">\n<tr>\n");
                    for cell in cells {
                        let image = escape_html(&format!("{IMAGE_DIR_NAME}/{}", cell.image));
                        let link = escape_html(&format!("{IMAGE_DIR_NAME}/{}", cell.link));
                        html.push_str("<td style=\"word-wrap: break-word;\" halign=\"center\" valign=\"top\">\n");
                        html.push_str(&format!(
                            "<p><a href=\"{link}\"><img style=\"width:{width}px\" src=\"{image}\"></a><br>\n{}</p>\n",
                            escape_html(&cell.caption)
                        ));
                        html.push_str("</td>\n");
                    }
                    html.push_str("</tr>\n</table>\n");
                }
            }
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write `{web_dir}/index.html`, replacing any previous version
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.web_dir.join(INDEX_FILE);
        fs::write(&path, self.render())
            .map_err(|e| Error::io(format!("writing {}", path.display()), e))?;
        log::debug!("Wrote gallery index {}", path.display());
        Ok(path)
    }
}

impl IndexBuilder for HtmlPage {
    fn add_header(&mut self, title: &str) {
        self.sections.push(Section::Header(title.to_string()));
    }

    fn add_images(&mut self, images: &[String], captions: &[String], links: &[String], width: u32) {
        debug_assert_eq!(images.len(), captions.len(), "one caption per image");
        debug_assert_eq!(images.len(), links.len(), "one link per image");
        let cells = images
            .iter()
            .zip(captions)
            .zip(links)
            .map(|((image, caption), link)| Cell {
                image: image.clone(),
                caption: caption.clone(),
                link: link.clone(),
            })
            .collect();
        self.sections.push(Section::Row { cells, width });
    }
}
