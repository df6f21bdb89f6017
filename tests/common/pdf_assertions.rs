use lopdf::Document as LopdfDocument;
use lopdf::Object;

/// Text shown by `Tj` operators on one page, one run per entry
pub fn page_text_runs(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_number) else {
        return Vec::new();
    };
    let Ok(content) = doc.get_and_decode_page_content(*page_id) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.iter().map(|&b| b as char).collect()),
            _ => None,
        })
        .collect()
}

/// Extract all text content from a PDF document, one line per text run
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page_num in 1..=doc.get_pages().len() as u32 {
        for run in page_text_runs(doc, page_num) {
            text.push_str(&run);
            text.push('\n');
        }
    }
    text
}

/// First page (1-based) on which a text run contains `needle`
#[allow(dead_code)]
pub fn page_of_text(doc: &LopdfDocument, needle: &str) -> Option<u32> {
    (1..=doc.get_pages().len() as u32)
        .find(|&page| page_text_runs(doc, page).iter().any(|run| run.contains(needle)))
}

/// BaseFont names of every font dictionary, including ones nested in resources
#[allow(dead_code)]
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    fn collect(object: &Object, fonts: &mut Vec<String>) {
        let Ok(dict) = object.as_dict() else {
            return;
        };
        if let Ok(name) = dict.get(b"BaseFont").and_then(Object::as_name) {
            fonts.push(String::from_utf8_lossy(name).to_string());
        }
        for (_, value) in dict.iter() {
            collect(value, fonts);
        }
    }

    let mut fonts = Vec::new();
    for (_, object) in doc.objects.iter() {
        collect(object, &mut fonts);
    }
    fonts.sort();
    fonts.dedup();
    fonts
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF references a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}
