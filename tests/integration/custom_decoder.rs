use std::any::Any;
use std::io::Read;

use tent::error::{ComponentError, RegistryError};
use tent::source::MemItem;
use tent::{
    decode, decode_with, Component, DecodeError, Decoder, DecoderRegistry, Format, MemSource,
    TreeDecoder,
};

/// Plain-text note whose first line may carry a numeric order.
#[derive(Debug, PartialEq)]
struct Note {
    id: String,
    order: f64,
    body: String,
}

impl Component for Note {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> f64 {
        self.order
    }

    fn encode(&self) -> Result<Vec<u8>, ComponentError> {
        Ok(format!("{}\n{}", self.order, self.body).into_bytes())
    }

    fn kind(&self) -> &'static str {
        "note"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct NoteDecoder;

impl Decoder for NoteDecoder {
    fn format(&self) -> Format {
        Format::new("note_", [".txt"])
    }

    fn decode(&self, id: &str, reader: &mut dyn Read) -> Result<Box<dyn Component>, ComponentError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let (first, body) = text.split_once('\n').unwrap_or((text.as_str(), ""));
        let order = first
            .trim()
            .parse::<f64>()
            .map_err(|e| ComponentError::Invalid(format!("bad order line: {}", e)))?;
        Ok(Box::new(Note {
            id: id.to_string(),
            order,
            body: body.to_string(),
        }))
    }

    fn kind(&self) -> &'static str {
        "note"
    }
}

/// Claims every `.checks` file, clashing with the built-in checklist decoder.
struct GreedyDecoder;

impl Decoder for GreedyDecoder {
    fn format(&self) -> Format {
        Format::new("todo_", [".checks"])
    }

    fn decode(&self, _id: &str, _reader: &mut dyn Read) -> Result<Box<dyn Component>, ComponentError> {
        Err(ComponentError::Invalid("never dispatched".to_string()))
    }

    fn kind(&self) -> &'static str {
        "greedy"
    }
}

fn notes(root: &tent::Category, path: &str) -> Vec<String> {
    root.find(path)
        .unwrap()
        .components
        .iter()
        .map(|c| c.id().to_string())
        .collect()
}

#[test]
fn custom_decoder_components_sort_by_order() {
    let source = MemSource::from_pairs([
        ("journal/note_late.txt", "20\nlate entry"),
        ("journal/note_early.txt", "5\nearly entry"),
        ("journal/ignored.txt", "no prefix"),
    ]);
    let root = decode(source, vec![Box::new(NoteDecoder)]).unwrap();

    assert_eq!(notes(&root, "journal"), vec!["early", "late"]);
    let early = root.find("journal").unwrap().components[0]
        .downcast_ref::<Note>()
        .unwrap();
    assert_eq!(early.body, "early entry");
}

#[test]
fn custom_decoder_failure_aborts_decode() {
    let source = MemSource::from_pairs([
        ("a/note_ok.txt", "1\nfine"),
        ("a/note_bad.txt", "first\nbroken"),
    ]);
    let err = decode(source, vec![Box::new(NoteDecoder)]).unwrap_err();
    assert_eq!(err.item(), Some("a/note_bad.txt"));
    assert!(err.to_string().contains("a/note_bad.txt"));
}

#[test]
fn overlapping_decoder_is_rejected() {
    let err = DecoderRegistry::new(vec![Box::new(GreedyDecoder)]).unwrap_err();
    match err {
        RegistryError::Collision {
            first_kind,
            second_kind,
            extension,
            ..
        } => {
            assert_eq!(first_kind, "checklist");
            assert_eq!(second_kind, "greedy");
            assert_eq!(extension, ".checks");
        }
        other => panic!("unexpected error {:?}", other),
    }

    let source = MemSource::from_pairs([("a/x.checks", "list: []")]);
    let err = decode(source, vec![Box::new(GreedyDecoder)]).unwrap_err();
    assert!(matches!(err, DecodeError::Registry(_)));
}

#[test]
fn custom_registry_without_builtins_skips_checklists() {
    let registry = DecoderRegistry::with_decoders(vec![Box::new(NoteDecoder)]).unwrap();
    let source = MemSource::from_pairs([("a/list.checks", "list: []"), ("a/note_n.txt", "1\n")]);
    let root = decode_with(source, &registry).unwrap();
    assert_eq!(notes(&root, "a"), vec!["n"]);
}

#[test]
fn inline_component_uses_custom_decoder() {
    let marker = "\
index: 1
components:
  - file: note_inline.txt
    content: \"2\\ninline body\"
sub:
  - id: child
    index: 4
";
    let source = MemSource::from_pairs([
        ("box/.category.yml", marker),
        ("box/note_file.txt", "1\nfrom file"),
    ]);
    let root = decode(source, vec![Box::new(NoteDecoder)]).unwrap();

    assert_eq!(notes(&root, "box"), vec!["file", "inline"]);
    assert_eq!(root.find("box/child").unwrap().index, 4.0);
}

#[test]
fn tree_decoder_feeds_items_one_at_a_time() {
    let registry = DecoderRegistry::new(vec![Box::new(NoteDecoder)]).unwrap();
    let mut decoder = TreeDecoder::new(&registry);

    decoder
        .feed(&MemItem::new("x/note_b.txt", "2\nb"))
        .unwrap();
    decoder
        .feed(&MemItem::new("x/.category.yml", "index: 7\n"))
        .unwrap();
    decoder
        .feed(&MemItem::new("x/note_a.txt", "1\na"))
        .unwrap();
    assert_eq!(decoder.summary().components, 2);

    let (root, summary) = decoder.finish();
    assert_eq!(summary.categories, 1);
    assert_eq!(root.find("x").unwrap().index, 7.0);
    assert_eq!(notes(&root, "x"), vec!["a", "b"]);
}
