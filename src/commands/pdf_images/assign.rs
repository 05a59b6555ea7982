use super::*;

/// A header this far below an image's top still counts as above it.
const HEADER_Y_TOLERANCE: f64 = 20.0;
const UNPARSEABLE_SECTION_ORDER: u64 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignConfig {
    pub min_width: u32,
    pub min_height: u32,
    pub carry_page_limit: usize,
}

impl AssignConfig {
    pub fn from_args(args: &PdfImagesArgs) -> Self {
        Self {
            min_width: args.min_width,
            min_height: args.min_height,
            carry_page_limit: args.carry_page_limit,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlacedImage<'a> {
    pub page_index: usize,
    pub image: &'a LayoutImage,
}

#[derive(Debug, Clone)]
pub struct SectionImages<'a> {
    pub key: SectionKey,
    pub images: Vec<PlacedImage<'a>>,
}

/// Last header at or above `image_y` (with tolerance) among headers sorted by Y.
fn header_above<'h>(page_headers: &[&'h SectionHeader], image_y: f64) -> Option<&'h SectionKey> {
    page_headers
        .iter()
        .rev()
        .find(|header| header.y <= image_y + HEADER_Y_TOLERANCE)
        .map(|header| &header.key)
}

/// Assigns each large enough image to one section, in page order.
///
/// Groups come out in first-assignment order; every xref is used at most once.
pub fn assign_images<'a>(
    pages: &'a [LayoutPage],
    headers: &[SectionHeader],
    config: AssignConfig,
) -> Vec<SectionImages<'a>> {
    let mut headers_by_page: BTreeMap<usize, Vec<&SectionHeader>> = BTreeMap::new();
    for header in headers {
        headers_by_page
            .entry(header.page_index)
            .or_default()
            .push(header);
    }
    for page_headers in headers_by_page.values_mut() {
        page_headers.sort_by(|left, right| left.y.total_cmp(&right.y));
    }

    let mut groups: Vec<SectionImages<'a>> = Vec::new();
    let mut group_positions: HashMap<SectionKey, usize> = HashMap::new();
    let mut assigned_xrefs = HashSet::new();
    let mut carry = CarryState::default();

    for (page_index, page) in pages.iter().enumerate() {
        let page_headers: &[&SectionHeader] = headers_by_page
            .get(&page_index)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for image in &page.images {
            if assigned_xrefs.contains(&image.xref) {
                continue;
            }
            if image.width < config.min_width || image.height < config.min_height {
                debug!(
                    xref = image.xref,
                    width = image.width,
                    height = image.height,
                    "skipping small image"
                );
                continue;
            }

            let image_y = image.y.unwrap_or(0.0);
            let Some(key) =
                header_above(page_headers, image_y).or_else(|| carry.carried(page_index))
            else {
                debug!(page = page_index + 1, xref = image.xref, "image has no section");
                continue;
            };

            assigned_xrefs.insert(image.xref);
            let position = match group_positions.get(key) {
                Some(position) => *position,
                None => {
                    groups.push(SectionImages {
                        key: key.clone(),
                        images: Vec::new(),
                    });
                    group_positions.insert(key.clone(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[position].images.push(PlacedImage { page_index, image });
        }

        carry.advance(page_index, page_headers, config.carry_page_limit);
    }

    groups
}

/// Commercial before technical, then by numeric section code.
pub fn section_order(key: &SectionKey) -> (Scope, Vec<u64>) {
    let numbers = key
        .parts()
        .iter()
        .map(|part| part.parse::<u64>())
        .collect::<std::result::Result<Vec<u64>, _>>()
        .unwrap_or_else(|_| vec![UNPARSEABLE_SECTION_ORDER]);
    (key.scope, numbers)
}

pub fn sort_sections(groups: &mut [SectionImages<'_>]) {
    groups.sort_by_key(|group| section_order(&group.key));
}
