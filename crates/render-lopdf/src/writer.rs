use dossier_render_core::RenderError;
use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes PDF objects to `W` as soon as they are produced.
///
/// Only the small structural objects (resources, page tree, catalog) are
/// held back until [`finish`](Self::finish), when the page list is complete.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    offsets: BTreeMap<u32, u64>,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    info: Option<Dictionary>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%\u{e2}\u{e3}\u{cf}\u{d3}\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            offsets: BTreeMap::new(),
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            info: None,
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    /// Writes `object` immediately under a fresh id.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.new_object_id();
        self.write_indirect_object(id, &object)?;
        Ok(id)
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.write_object(Object::Stream(stream))?)
    }

    /// Registers a written page object as the next page of the document.
    pub fn push_page(&mut self, page_id: ObjectId) {
        self.page_ids.push(page_id);
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info = Some(info);
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffered_objects.insert(self.catalog_id, catalog_dict.into());

        let buffered = std::mem::take(&mut self.buffered_objects);
        for (id, object) in &buffered {
            self.write_indirect_object(*id, object)?;
        }

        let info_id = match self.info.take() {
            Some(info) => Some(self.write_object(Object::Dictionary(info))?),
            None => None,
        };

        let xref_start = self.writer.stream_position()?;
        self.write_xref()?;

        let mut trailer = dictionary! { "Size" => (self.max_id + 1) as i64, "Root" => self.catalog_id };
        if let Some(info_id) = info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_indirect_object(&mut self, id: ObjectId, object: &Object) -> io::Result<()> {
        let offset = self.writer.stream_position()?;
        self.offsets.insert(id.0, offset);
        writeln!(self.writer, "{} {} obj", id.0, id.1)?;
        internal_writer::write_object(&mut self.writer, object)?;
        writeln!(self.writer, "\nendobj")?;
        Ok(())
    }

    /// A single xref section covering ids `0..=max_id`; ids that were
    /// allocated but never written are listed as free.
    fn write_xref(&mut self) -> io::Result<()> {
        writeln!(self.writer, "xref")?;
        writeln!(self.writer, "0 {}", self.max_id + 1)?;
        writeln!(self.writer, "0000000000 65535 f ")?;
        for id in 1..=self.max_id {
            match self.offsets.get(&id) {
                Some(offset) => writeln!(self.writer, "{:010} 00000 n ", offset)?,
                None => writeln!(self.writer, "0000000000 00000 f ")?,
            }
        }
        Ok(())
    }
}

mod internal_writer {
    use super::*;
    use lopdf::StringFormat;

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        match byte {
                            b'(' | b')' | b'\\' => writer.write_all(&[b'\\', byte])?,
                            b'\n' => writer.write_all(b"\\n")?,
                            b'\r' => writer.write_all(b"\\r")?,
                            _ => writer.write_all(&[byte])?,
                        }
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    writer.write_all(b"<")?;
                    for byte in s {
                        write!(writer, "{:02X}", byte)?;
                    }
                    writer.write_all(b">")
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn writes_a_loadable_empty_document() {
        let writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", Dictionary::new()).unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF"));
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 0);
    }

    #[test]
    fn literal_strings_are_escaped() {
        let mut out = Vec::new();
        let object = Object::String(b"a(b)c\\d\n".to_vec(), lopdf::StringFormat::Literal);
        internal_writer::write_object(&mut out, &object).unwrap();
        assert_eq!(out, b"(a\\(b\\)c\\\\d\\n)".to_vec());
    }

    #[test]
    fn info_dictionary_is_referenced_from_trailer() {
        let mut writer =
            StreamingPdfWriter::new(Cursor::new(Vec::new()), "1.7", Dictionary::new()).unwrap();
        writer.set_info(dictionary! {
            "Title" => Object::String(b"Report".to_vec(), lopdf::StringFormat::Literal),
        });
        let bytes = writer.finish().unwrap().into_inner();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Report");
    }
}
