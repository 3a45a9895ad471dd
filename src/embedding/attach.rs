// Attaching embeddings to extracted records

use super::{normalize, EmbedError, TextEmbedder};
use crate::extractors::base::{
    ClassRecord, ConstructorRecord, EmbeddingSlot, EventRecord, FieldRecord, MethodRecord,
    PropertyRecord,
};
use tracing::debug;

/// A record whose source text can be embedded into its own slot
pub trait Embeddable {
    fn embedding_text(&self) -> &str;
    fn embedding_slot(&self) -> &EmbeddingSlot;
    fn embedding_slot_mut(&mut self) -> &mut EmbeddingSlot;
}

macro_rules! impl_embeddable {
    ($($record:ty),+ $(,)?) => {
        $(
            impl Embeddable for $record {
                fn embedding_text(&self) -> &str {
                    &self.source_code
                }

                fn embedding_slot(&self) -> &EmbeddingSlot {
                    &self.embedding
                }

                fn embedding_slot_mut(&mut self) -> &mut EmbeddingSlot {
                    &mut self.embedding
                }
            }
        )+
    };
}

impl_embeddable!(
    ClassRecord,
    MethodRecord,
    PropertyRecord,
    FieldRecord,
    EventRecord,
    ConstructorRecord,
);

/// Embed one record and store the normalized vector
///
/// Returns `false` without a request when the slot is already filled or the
/// record has no text.
pub fn embed_record<R, E>(embedder: &E, record: &mut R) -> Result<bool, EmbedError>
where
    R: Embeddable + ?Sized,
    E: TextEmbedder + ?Sized,
{
    if record.embedding_slot().is_set() || record.embedding_text().trim().is_empty() {
        return Ok(false);
    }

    let vector = normalize(&embedder.embed(record.embedding_text())?);
    record
        .embedding_slot_mut()
        .set(vector)
        .map_err(anyhow::Error::from)?;
    Ok(true)
}

/// Embed a class and every member record it holds
///
/// Stops at the first failed request; records embedded before it keep their
/// vectors. Returns how many records were embedded.
pub fn attach_embeddings<E>(embedder: &E, class: &mut ClassRecord) -> Result<usize, EmbedError>
where
    E: TextEmbedder + ?Sized,
{
    let mut embedded = usize::from(embed_record(embedder, class)?);

    for method in &mut class.methods {
        embedded += usize::from(embed_record(embedder, method)?);
    }
    for property in &mut class.properties {
        embedded += usize::from(embed_record(embedder, property)?);
    }
    for event in &mut class.events {
        embedded += usize::from(embed_record(embedder, event)?);
    }
    for field in &mut class.fields {
        embedded += usize::from(embed_record(embedder, field)?);
    }
    for constructor in &mut class.constructors {
        embedded += usize::from(embed_record(embedder, constructor)?);
    }

    debug!("Attached {} embeddings to class {}", embedded, class.name);
    Ok(embedded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::test_server::ScriptedServer;
    use crate::embedding::{EmbeddingClient, EmbeddingConfig};
    use crate::extractors::ExtractorManager;
    use std::cell::RefCell;

    /// Records every text it is asked to embed; fails on the nth call when set
    struct RecordingEmbedder {
        texts: RefCell<Vec<String>>,
        fail_on: Option<usize>,
    }

    impl RecordingEmbedder {
        fn new() -> Self {
            Self {
                texts: RefCell::new(Vec::new()),
                fail_on: None,
            }
        }
    }

    impl TextEmbedder for RecordingEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
            let mut texts = self.texts.borrow_mut();
            texts.push(text.to_string());
            if self.fail_on == Some(texts.len()) {
                return Err(EmbedError::shape("scripted failure"));
            }
            Ok(vec![3.0, 4.0])
        }
    }

    fn sample_class() -> ClassRecord {
        let code = r#"
public class Account
{
    private decimal balance;
    public string Owner { get; set; }
    public event EventHandler Changed;
    public Account(string owner) { Owner = owner; }
    public void Deposit(decimal amount) { balance += amount; Changed?.Invoke(this, null); }
}
"#;
        ExtractorManager::new()
            .extract_classes("Account.cs", code)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn test_every_record_receives_a_normalized_vector() {
        let embedder = RecordingEmbedder::new();
        let mut class = sample_class();

        let embedded = attach_embeddings(&embedder, &mut class).unwrap();
        assert_eq!(embedded, 6);

        let expected: &[f32] = &[0.6, 0.8];
        let approx = |slot: &EmbeddingSlot| {
            let v = slot.get().unwrap();
            (v[0] - expected[0]).abs() < 1e-6 && (v[1] - expected[1]).abs() < 1e-6
        };
        assert!(approx(&class.embedding));
        assert!(approx(&class.methods[0].embedding));
        assert!(approx(&class.properties[0].embedding));
        assert!(approx(&class.events[0].embedding));
        assert!(approx(&class.fields[0].embedding));
        assert!(approx(&class.constructors[0].embedding));

        let texts = embedder.texts.borrow();
        assert_eq!(texts[0], class.source_code);
        assert_eq!(texts[1], class.methods[0].source_code);
    }

    #[test]
    fn test_filled_slots_and_blank_text_are_skipped() {
        let embedder = RecordingEmbedder::new();
        let mut class = sample_class();
        class.embedding.set(vec![1.0]).unwrap();
        class.methods[0].source_code = "   \n".to_string();

        let embedded = attach_embeddings(&embedder, &mut class).unwrap();
        assert_eq!(embedded, 4);
        assert_eq!(class.embedding.get(), Some(&[1.0][..]));
        assert!(!class.methods[0].embedding.is_set());

        // A second pass has nothing left to do
        assert_eq!(attach_embeddings(&embedder, &mut class).unwrap(), 0);
        assert_eq!(embedder.texts.borrow().len(), 4);
    }

    #[test]
    fn test_first_failure_is_propagated() {
        let embedder = RecordingEmbedder {
            texts: RefCell::new(Vec::new()),
            fail_on: Some(2),
        };
        let mut class = sample_class();

        let err = attach_embeddings(&embedder, &mut class).unwrap_err();
        assert!(matches!(err, EmbedError::ResponseShape { .. }));
        assert!(class.embedding.is_set());
        assert!(!class.methods[0].embedding.is_set());
        assert_eq!(embedder.texts.borrow().len(), 2);
    }

    #[test]
    fn test_embeds_through_http_client() {
        let server = ScriptedServer::ok(r#"{"embeddings":[[0,5]]}"#);
        let client = EmbeddingClient::new(EmbeddingConfig::new(server.base_url.clone(), "m"));

        let mut method = sample_class().methods.remove(0);
        assert!(embed_record(&client, &mut method).unwrap());
        assert_eq!(method.embedding.get(), Some(&[0.0, 1.0][..]));

        let requests = server.requests();
        assert!(requests[0].contains("Deposit"));
    }
}
