use super::*;

const CONTRACT_CATEGORY: &str = "业绩证明";

fn squash_lower(text: &str) -> String {
    text.to_lowercase().replace(' ', "")
}

/// Points certifications at the first indexed document whose tags or type mention them,
/// and projects, in order, at the documents filed as contract evidence.
pub fn link_image_index(
    index: &ImageIndex,
    certifications: &mut [Certification],
    projects: &mut [Project],
) -> usize {
    let mut linked = 0;

    for cert in certifications.iter_mut() {
        let needle = squash_lower(&cert.name);
        let document = index.documents.iter().find(|document| {
            squash_lower(&document.searchable_tags.join(" ")).contains(&needle)
                || squash_lower(&document.section_type).contains(&needle)
        });
        if let Some(document) = document {
            cert.image_ref = Some(document.id.clone());
            linked += 1;
        }
    }

    let contracts = index
        .documents
        .iter()
        .filter(|document| document.category == CONTRACT_CATEGORY);
    for (project, document) in projects.iter_mut().zip(contracts) {
        project.image_ref = Some(document.id.clone());
        linked += 1;
    }

    linked
}
