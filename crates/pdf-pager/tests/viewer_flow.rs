use crossbeam::channel::{self, Receiver, Sender};
use eframe::egui;
use pdf_pager::ui::layout::ViewerLayout;
use pdf_pager::ui::style::ViewerStyle;
use pdf_pager::{
    DocumentSource, LoadPhase, LoadedDocument, PdfError, PdfViewer, RenderEngine, RenderedPage,
    Result,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

struct StubEngine {
    pages: Option<usize>,
    fail_render: bool,
    renders: AtomicUsize,
    gate: Option<Receiver<()>>,
}

impl StubEngine {
    fn with_pages(pages: usize) -> Self {
        Self {
            pages: Some(pages),
            fail_render: false,
            renders: AtomicUsize::new(0),
            gate: None,
        }
    }

    fn failing() -> Self {
        Self {
            pages: None,
            ..Self::with_pages(0)
        }
    }

    fn gated(pages: usize) -> (Self, Sender<()>) {
        let (sender, receiver) = channel::bounded(1);
        let engine = Self {
            gate: Some(receiver),
            ..Self::with_pages(pages)
        };
        (engine, sender)
    }
}

impl RenderEngine for StubEngine {
    fn load(&self, _source: &DocumentSource) -> Result<LoadedDocument> {
        if let Some(gate) = &self.gate {
            let _ = gate.recv_timeout(Duration::from_secs(5));
        }
        match self.pages {
            Some(pages) => Ok(LoadedDocument::new(Arc::from(&b"%PDF-1.7"[..]), pages)),
            None => Err(PdfError::FileNotFound("missing.pdf".into())),
        }
    }

    fn render_page(
        &self,
        document: &LoadedDocument,
        page_number: usize,
        _target_width: u32,
    ) -> Result<RenderedPage> {
        document.page_index(page_number)?;
        self.renders.fetch_add(1, Ordering::SeqCst);
        if self.fail_render {
            return Err(PdfError::RenderFailed("stub".into()));
        }
        Ok(RenderedPage {
            width: 4,
            height: 4,
            rgba: vec![255; 4 * 4 * 4],
        })
    }
}

fn screen() -> egui::Rect {
    egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 1000.0))
}

fn run_frame(ctx: &egui::Context, viewer: &mut PdfViewer, events: Vec<egui::Event>) -> egui::Rect {
    run_frame_at(ctx, viewer, events, None).0
}

fn run_frame_at(
    ctx: &egui::Context,
    viewer: &mut PdfViewer,
    events: Vec<egui::Event>,
    time: Option<f64>,
) -> (egui::Rect, egui::FullOutput) {
    let input = egui::RawInput {
        screen_rect: Some(screen()),
        events,
        time,
        ..Default::default()
    };
    let mut rect = egui::Rect::NOTHING;
    let output = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            rect = viewer.show(ui).rect;
        });
    });
    (rect, output)
}

fn painted_texts(output: &egui::FullOutput) -> Vec<String> {
    fn collect(shape: &egui::Shape, texts: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => texts.push(text.galley.text().to_owned()),
            egui::Shape::Vec(shapes) => {
                for shape in shapes {
                    collect(shape, texts);
                }
            }
            _ => {}
        }
    }

    let mut texts = Vec::new();
    for clipped in &output.shapes {
        collect(&clipped.shape, &mut texts);
    }
    texts
}

fn frame_texts(ctx: &egui::Context, viewer: &mut PdfViewer) -> Vec<String> {
    painted_texts(&run_frame_at(ctx, viewer, Vec::new(), None).1)
}

// Rests the pointer past the tooltip delay; returns the last frame's texts.
fn hover_texts(ctx: &egui::Context, viewer: &mut PdfViewer, pos: egui::Pos2) -> Vec<String> {
    let start = ctx.input(|i| i.time) + 1.0;
    run_frame_at(ctx, viewer, vec![egui::Event::PointerMoved(pos)], Some(start));
    let mut texts = Vec::new();
    for step in 1..=20 {
        let (_, output) = run_frame_at(ctx, viewer, Vec::new(), Some(start + step as f64 * 0.1));
        texts = painted_texts(&output);
    }
    texts
}

fn has_text(texts: &[String], needle: &str) -> bool {
    texts.iter().any(|text| text == needle)
}

fn settle(ctx: &egui::Context, viewer: &mut PdfViewer) -> egui::Rect {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        run_frame(ctx, viewer, Vec::new());
        if viewer.phase() != &LoadPhase::Loading {
            // One more frame so the loaded widgets are known to hit testing.
            return run_frame(ctx, viewer, Vec::new());
        }
        assert!(Instant::now() < deadline, "document never finished loading");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn click(ctx: &egui::Context, viewer: &mut PdfViewer, pos: egui::Pos2) {
    let button = |pressed| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    };
    run_frame(ctx, viewer, vec![egui::Event::PointerMoved(pos)]);
    run_frame(ctx, viewer, vec![button(true)]);
    run_frame(ctx, viewer, vec![button(false)]);
    run_frame(ctx, viewer, Vec::new());
}

fn layout(rect: egui::Rect, pages: usize) -> ViewerLayout {
    ViewerLayout::compute(rect, &ViewerStyle::default(), pages)
}

fn source() -> DocumentSource {
    DocumentSource::from(b"%PDF-1.7".to_vec())
}

#[test]
fn test_loading_state_before_document_arrives() {
    let (engine, release) = StubEngine::gated(3);
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(source(), Arc::new(engine));

    run_frame(&ctx, &mut viewer, Vec::new());
    assert_eq!(viewer.phase(), &LoadPhase::Loading);
    assert_eq!(viewer.total_pages(), 0);
    assert!(viewer.state().pagination_dots().is_empty());
    assert!(!viewer.state().can_go_next());
    assert!(!viewer.state().can_go_previous());

    release.send(()).unwrap();
    settle(&ctx, &mut viewer);
    assert_eq!(viewer.phase(), &LoadPhase::Loaded);
    assert_eq!(viewer.total_pages(), 3);
}

#[test]
fn test_five_page_document_initial_view() {
    let engine = Arc::new(StubEngine::with_pages(5));
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(source(), engine.clone());

    settle(&ctx, &mut viewer);

    let dots = viewer.state().pagination_dots();
    assert_eq!(dots.len(), 5);
    assert!(dots[0].active);
    assert_eq!(viewer.current_page(), 1);
    assert!(!viewer.state().can_go_previous());
    assert!(viewer.state().can_go_next());
    assert!(engine.renders.load(Ordering::SeqCst) >= 1);
}

#[test]
fn test_arrows_and_dots_navigate() {
    let engine = Arc::new(StubEngine::with_pages(5));
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(source(), engine);

    let rect = settle(&ctx, &mut viewer);
    let layout = layout(rect, 5);

    click(&ctx, &mut viewer, layout.next.center());
    assert_eq!(viewer.current_page(), 2);

    click(&ctx, &mut viewer, layout.dots[4].center());
    assert_eq!(viewer.current_page(), 5);

    click(&ctx, &mut viewer, layout.previous.center());
    assert_eq!(viewer.current_page(), 4);

    // Next arrow is hidden with one page left; clicking its slot does nothing.
    assert!(!viewer.state().can_go_next());
    click(&ctx, &mut viewer, layout.next.center());
    assert_eq!(viewer.current_page(), 4);

    click(&ctx, &mut viewer, layout.dots[0].center());
    assert_eq!(viewer.current_page(), 1);

    // Previous arrow is hidden on the first page.
    click(&ctx, &mut viewer, layout.previous.center());
    assert_eq!(viewer.current_page(), 1);
}

#[test]
fn test_failed_load_shows_no_navigation() {
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(
        DocumentSource::Path("missing.pdf".into()),
        Arc::new(StubEngine::failing()),
    );

    let rect = settle(&ctx, &mut viewer);

    match viewer.phase() {
        LoadPhase::Failed(reason) => assert!(reason.contains("missing.pdf")),
        other => panic!("Expected Failed, got {:?}", other),
    }
    assert!(viewer.state().pagination_dots().is_empty());
    assert!(!viewer.state().can_go_next());
    assert!(!viewer.state().can_go_previous());

    click(&ctx, &mut viewer, rect.center());
    assert!(matches!(viewer.phase(), LoadPhase::Failed(_)));
    assert_eq!(viewer.current_page(), 1);
}

#[test]
fn test_render_failure_keeps_document_loaded() {
    let engine = Arc::new(StubEngine {
        fail_render: true,
        ..StubEngine::with_pages(3)
    });
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(source(), engine.clone());

    let rect = settle(&ctx, &mut viewer);
    assert_eq!(viewer.phase(), &LoadPhase::Loaded);

    // A failed page is not re-rendered every frame.
    let renders = engine.renders.load(Ordering::SeqCst);
    run_frame(&ctx, &mut viewer, Vec::new());
    run_frame(&ctx, &mut viewer, Vec::new());
    assert_eq!(engine.renders.load(Ordering::SeqCst), renders);

    click(&ctx, &mut viewer, layout(rect, 3).dots[1].center());
    assert_eq!(viewer.current_page(), 2);
    assert_eq!(viewer.phase(), &LoadPhase::Loaded);
}

#[test]
fn test_viewers_dropped_mid_load_do_not_panic() {
    let (engine, release) = StubEngine::gated(2);
    let viewer = PdfViewer::new(source(), Arc::new(engine));
    drop(viewer);
    let _ = release.send(());
    std::thread::sleep(Duration::from_millis(20));
}

#[test]
fn test_loading_frame_paints_only_loading_text() {
    let (engine, release) = StubEngine::gated(3);
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(source(), Arc::new(engine));

    let texts = frame_texts(&ctx, &mut viewer);
    assert_eq!(viewer.phase(), &LoadPhase::Loading);
    assert!(has_text(&texts, "Loading resource..."), "{:?}", texts);
    assert!(!has_text(&texts, "Failed to load PDF preview"));
    assert!(!has_text(&texts, "⏴"));
    assert!(!has_text(&texts, "⏵"));

    release.send(()).unwrap();
    settle(&ctx, &mut viewer);
}

#[test]
fn test_failed_frame_paints_only_failure_text() {
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(
        DocumentSource::Url("https://example.invalid/doc.pdf".into()),
        Arc::new(StubEngine::failing()),
    );

    settle(&ctx, &mut viewer);
    let texts = frame_texts(&ctx, &mut viewer);
    assert!(matches!(viewer.phase(), LoadPhase::Failed(_)));
    assert!(has_text(&texts, "Failed to load PDF preview"), "{:?}", texts);
    assert!(!has_text(&texts, "Loading resource..."));
    assert!(!has_text(&texts, "⏴"));
    assert!(!has_text(&texts, "⏵"));
}

#[test]
fn test_loaded_frame_paints_arrows_without_placeholders() {
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(source(), Arc::new(StubEngine::with_pages(5)));

    let rect = settle(&ctx, &mut viewer);
    let texts = frame_texts(&ctx, &mut viewer);
    assert!(!has_text(&texts, "Loading resource..."));
    assert!(!has_text(&texts, "Failed to load PDF preview"));
    assert!(has_text(&texts, "⏵"), "{:?}", texts);
    assert!(!has_text(&texts, "⏴"));

    click(&ctx, &mut viewer, layout(rect, 5).next.center());
    let texts = frame_texts(&ctx, &mut viewer);
    assert_eq!(viewer.current_page(), 2);
    assert!(has_text(&texts, "⏴"));
    assert!(has_text(&texts, "⏵"));
}

#[test]
fn test_hovering_controls_shows_tooltips() {
    let ctx = egui::Context::default();
    let mut viewer = PdfViewer::new(source(), Arc::new(StubEngine::with_pages(5)));

    let rect = settle(&ctx, &mut viewer);
    let layout = layout(rect, 5);
    click(&ctx, &mut viewer, layout.next.center());
    assert_eq!(viewer.current_page(), 2);

    let texts = hover_texts(&ctx, &mut viewer, layout.next.center());
    assert!(has_text(&texts, "Next Page"), "{:?}", texts);
    assert!(!has_text(&texts, "Previous Page"));

    let texts = hover_texts(&ctx, &mut viewer, layout.previous.center());
    assert!(has_text(&texts, "Previous Page"), "{:?}", texts);

    let texts = hover_texts(&ctx, &mut viewer, layout.dots[3].center());
    assert!(has_text(&texts, "Page 4 of 5"), "{:?}", texts);
    assert_eq!(viewer.current_page(), 2);
}
