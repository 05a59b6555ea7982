use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TocConfig {
    /// Outlines shorter than this are treated as absent.
    pub min_embedded_entries: usize,
    /// Direct validation below this rate triggers offset detection.
    pub offset_trigger_rate: f64,
    pub toc_scan_pages: usize,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_embedded_entries: 3,
            offset_trigger_rate: 0.5,
            toc_scan_pages: 20,
        }
    }
}

impl TocConfig {
    pub fn from_args(args: &PdfTocArgs) -> Self {
        Self {
            min_embedded_entries: args.min_embedded_entries,
            offset_trigger_rate: args.offset_trigger_rate,
            toc_scan_pages: args.toc_scan_pages,
        }
    }
}

pub struct TocExtractor {
    config: TocConfig,
    classifier: TitleClassifier,
    toc_page_detector: TocPageDetector,
}

impl TocExtractor {
    pub fn new(config: TocConfig) -> Result<Self> {
        Ok(Self {
            config,
            classifier: TitleClassifier::new()?,
            toc_page_detector: TocPageDetector::new()?,
        })
    }

    /// Runs the whole pipeline over already extracted inputs.
    pub fn extract(
        &self,
        source: &str,
        total_pages: usize,
        raw_outline: &[OutlineItem],
        page_texts: &[String],
    ) -> TocResult {
        let has_embedded_toc = raw_outline.len() >= self.config.min_embedded_entries;
        let embedded_toc = if has_embedded_toc {
            normalize_outline(&self.classifier, raw_outline)
        } else {
            Vec::new()
        };

        let toc_pages = self
            .toc_page_detector
            .detect(page_texts, self.config.toc_scan_pages);
        let toc_page_text = toc_pages
            .iter()
            .filter_map(|page| page_texts.get(page - 1))
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join("\n\n");

        let mut page_offset = 0;
        let mut page_sections = Vec::new();
        let mut validation_summary = ValidationSummary::empty();

        if !embedded_toc.is_empty() {
            let (mapping, offset) = self.reconcile_page_mapping(&embedded_toc, page_texts);
            page_offset = offset;
            page_sections = build_page_sections(&mapping.entries, total_pages, page_offset);

            let total = embedded_toc.len();
            validation_summary = ValidationSummary {
                total,
                passed: mapping.validated,
                failed: mapping.not_found,
                rate: round_to_thousandths(mapping.validated as f64 / total as f64),
            };
        }

        TocResult {
            source: source.to_string(),
            total_pages,
            has_embedded_toc,
            embedded_toc_count: embedded_toc.len(),
            embedded_toc,
            toc_pages,
            toc_page_text,
            page_offset,
            page_sections,
            validation_summary,
        }
    }

    /// Direct validation, replaced by an offset mapping only when that validates more entries.
    pub fn reconcile_page_mapping(
        &self,
        entries: &[TocEntry],
        page_texts: &[String],
    ) -> (MappingOutcome, i64) {
        let direct = validate_page_mapping(entries, page_texts, 0);
        debug!(
            validated = direct.validated,
            total = entries.len(),
            rate = direct.rate(),
            "direct page mapping"
        );

        if entries.is_empty() || direct.rate() >= self.config.offset_trigger_rate {
            return (direct, 0);
        }

        let detected_offset = detect_page_offset(entries, page_texts);
        if detected_offset == 0 {
            return (direct, 0);
        }

        let shifted = validate_page_mapping(entries, page_texts, detected_offset);
        if shifted.validated > direct.validated {
            debug!(
                offset = detected_offset,
                validated = shifted.validated,
                total = entries.len(),
                "page offset improved validation"
            );
            (shifted, detected_offset)
        } else {
            (direct, 0)
        }
    }
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
