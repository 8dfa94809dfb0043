//! XML serialization of assembled batches.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use drsxml_core::DoiBatch;
use drsxml_model::Element;

const INDENT_SIZE: usize = 2;

/// Render a batch as a UTF-8 XML document with declaration.
pub fn render_document(batch: &DoiBatch) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    write_batch(&mut xml, batch)?;
    String::from_utf8(xml.into_inner()).context("serialized xml is not utf-8")
}

/// Render a single element subtree without a declaration.
pub fn render_element(element: &Element) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    write_element(&mut xml, element)?;
    String::from_utf8(xml.into_inner()).context("serialized xml is not utf-8")
}

/// Write a batch to `output_path`, creating parent directories as needed.
pub fn write_document(output_path: &Path, batch: &DoiBatch) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut xml = Writer::new_with_indent(BufWriter::new(file), b' ', INDENT_SIZE);
    write_batch(&mut xml, batch)?;
    xml.into_inner()
        .flush()
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(path = %output_path.display(), "wrote doi_batch");
    Ok(())
}

/// `<output_dir>/<source stem>.xml`.
pub fn output_path(output_dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "doi_batch".to_string());
    output_dir.join(format!("{stem}.xml"))
}

fn write_batch<W: Write>(xml: &mut Writer<W>, batch: &DoiBatch) -> Result<()> {
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(start_tag(&batch.root)))?;
    write_element(xml, &batch.head)?;
    write_element(xml, &batch.body)?;
    xml.write_event(Event::End(BytesEnd::new(batch.root.name())))?;
    xml.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Elements with children nest; leaves with text become `<a>text</a>` and
/// leaves without text self-close.
///
/// Fails on an element that carries both text and children.
pub fn write_element<W: Write>(xml: &mut Writer<W>, element: &Element) -> Result<()> {
    let start = start_tag(element);
    if !element.children().is_empty() {
        if element.text().is_some() {
            bail!("<{}> has both text and child elements", element.name());
        }
        xml.write_event(Event::Start(start))?;
        for child in element.children() {
            write_element(xml, child)?;
        }
        xml.write_event(Event::End(BytesEnd::new(element.name())))?;
        return Ok(());
    }
    match element.text() {
        Some(text) => {
            xml.write_event(Event::Start(start))?;
            xml.write_event(Event::Text(BytesText::new(text)))?;
            xml.write_event(Event::End(BytesEnd::new(element.name())))?;
        }
        None => {
            xml.write_event(Event::Empty(start))?;
        }
    }
    Ok(())
}

fn start_tag(element: &Element) -> BytesStart<'_> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_forms() {
        let mut root = Element::new("r");
        root.add_text_child("a", "x");
        root.add_text_child("b", "");
        root.add_child("c").set_attr("reason", "simple_series");
        let xml = render_element(&root).expect("render");
        assert_eq!(
            xml,
            "<r>\n  <a>x</a>\n  <b></b>\n  <c reason=\"simple_series\"/>\n</r>"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let element = Element::new("title")
            .with_attr("note", "a \"quoted\" <value>")
            .with_text("Form & Function <2024>");
        let xml = render_element(&element).expect("render");
        assert!(xml.contains("Form &amp; Function &lt;2024&gt;"));
        assert!(xml.contains("note=\"a &quot;quoted&quot; &lt;value&gt;\""));
    }

    #[test]
    fn text_beside_children_is_rejected() {
        let mut root = Element::new("titles").with_text("stray");
        root.add_text_child("title", "A title");
        let error = render_element(&root).expect_err("mixed content");
        assert!(error.to_string().contains("<titles>"));
    }

    #[test]
    fn output_path_uses_stem() {
        let path = output_path(Path::new("out"), Path::new("data/drs2024.xlsx"));
        assert_eq!(path, Path::new("out").join("drs2024.xml"));
    }
}
