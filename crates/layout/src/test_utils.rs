use crate::render_tree;
use folio_idf::DomNode;
use folio_render_core::RecordingSurface;
use folio_style::ExportOptions;
use folio_traits::InMemoryResourceProvider;

/// Renders `root` with default options and no image resources.
pub fn render(root: &DomNode) -> RecordingSurface {
    render_with(root, &ExportOptions::default())
}

pub fn render_with(root: &DomNode, options: &ExportOptions) -> RecordingSurface {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut surface = RecordingSurface::new();
    let resources = InMemoryResourceProvider::new();
    render_tree(root, options, &mut surface, &resources).unwrap();
    surface
}

/// Renders with a resource provider and surface supplied by the test.
pub fn render_into(
    root: &DomNode,
    surface: &mut RecordingSurface,
    resources: &InMemoryResourceProvider,
) -> crate::LayoutSummary {
    let _ = env_logger::builder().is_test(true).try_init();
    render_tree(root, &ExportOptions::default(), surface, resources).unwrap()
}

pub fn doc(children: impl IntoIterator<Item = DomNode>) -> DomNode {
    DomNode::element("div").with_children(children)
}

pub fn p(text: &str) -> DomNode {
    DomNode::element("p").with_text(text)
}

pub fn br() -> DomNode {
    DomNode::element("br")
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
