use crate::model::{
    ChangeKind, Hyperlink, ImageRef, LinkTarget, ListItemRun, Node, NoteKind, NoteReference,
    ObjectRef, Paragraph, PreservedText, TextRun, Title, TitleContent, TrackedChange,
};
use crate::style::{FontStyle, ParagraphStyle};
use crate::units::Length;

use super::{
    DML_NS, OFFICE_NS, PartReader, REL_NS, VML_NS, WML_NS, WPD_NS, is_wml, symbols, wml,
};

/// Destination and revision metadata a wrapper element hands down to the runs
/// it contains.
#[derive(Clone, Default)]
struct RunScope {
    link: Option<LinkTarget>,
    change: Option<TrackedChange>,
}

/// `Title` is depth 0, `Heading<N>` is depth N for N >= 1.
pub(crate) fn heading_depth(style_id: &str) -> Option<u8> {
    if style_id == "Title" {
        return Some(0);
    }
    let digits = style_id.strip_prefix("Heading")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u8>().ok().filter(|&depth| depth >= 1)
}

fn has_field(p: roxmltree::Node) -> bool {
    p.descendants()
        .any(|n| is_wml(n, "instrText") || is_wml(n, "fldSimple"))
}

fn tracked_change(wrapper: roxmltree::Node, kind: ChangeKind) -> TrackedChange {
    TrackedChange {
        kind,
        author: wrapper.attribute((WML_NS, "author")).map(str::to_string),
        date: wrapper.attribute((WML_NS, "date")).map(str::to_string),
    }
}

fn run_font(run: roxmltree::Node) -> Option<FontStyle> {
    wml(run, "rPr")
        .map(FontStyle::from_node)
        .filter(|f| !f.is_empty())
}

fn flush_text(text: &mut String, font: &Option<FontStyle>, scope: &RunScope, out: &mut Vec<Node>) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        text: std::mem::take(text),
        font: font.clone(),
        change: scope.change.clone(),
    };
    out.push(match &scope.link {
        Some(target) => Node::Hyperlink(Hyperlink {
            target: target.clone(),
            run,
        }),
        None => Node::Text(run),
    });
}

fn find_descendant<'a>(
    node: roxmltree::Node<'a, 'a>,
    ns: &str,
    name: &str,
) -> Option<roxmltree::Node<'a, 'a>> {
    node.descendants()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(ns))
}

/// One length from a VML `style` attribute such as `width:120pt;height:60pt`.
fn vml_style_length(style: &str, key: &str) -> Option<Length> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .find(|(k, _)| k.trim() == key)
        .and_then(|(_, v)| Length::parse_lenient(v.trim()))
}

#[derive(Default)]
struct PendingField {
    instruction: String,
    in_result: bool,
}

/// Literal text of a paragraph holding fields. Instructions are kept as
/// `{INSTR}`; displayed results are dropped.
#[derive(Default)]
struct FieldText {
    text: String,
    open: Vec<PendingField>,
    font: Option<FontStyle>,
}

impl FieldText {
    fn begin(&mut self) {
        self.open.push(PendingField::default());
    }

    fn instruction(&mut self, s: &str) {
        if let Some(field) = self.open.last_mut().filter(|f| !f.in_result) {
            field.instruction.push_str(s);
        }
    }

    fn separate(&mut self) {
        if let Some(field) = self.open.last_mut() {
            field.in_result = true;
        }
    }

    fn end(&mut self) {
        if let Some(field) = self.open.pop() {
            self.emit(&field.instruction);
        }
    }

    fn emit(&mut self, instruction: &str) {
        let token = format!("{{{}}}", instruction.trim());
        match self.open.last_mut() {
            Some(outer) if !outer.in_result => outer.instruction.push_str(&token),
            Some(_) => {}
            None => self.text.push_str(&token),
        }
    }

    fn literal(&mut self, s: &str) {
        if self.open.is_empty() {
            self.text.push_str(s);
        }
    }

    fn finish(mut self) -> (String, Option<FontStyle>) {
        while !self.open.is_empty() {
            self.end();
        }
        (self.text, self.font)
    }
}

impl PartReader<'_> {
    /// Classify and read one `w:p`. Field, list item, heading and plain
    /// paragraph are tried in that order.
    pub(super) fn read_paragraph(&self, p: roxmltree::Node) -> Node {
        let style = wml(p, "pPr")
            .map(ParagraphStyle::from_node)
            .filter(|s| !s.is_empty());

        if has_field(p) {
            return Node::Field(self.read_field_text(p, style));
        }

        if let Some(num) = style
            .as_ref()
            .and_then(|s| s.numbering)
            .filter(|n| n.num_id != 0)
        {
            let format = self.ctx.numbering.level(num.num_id, num.level).map(|l| l.format);
            if format.is_none() {
                log::debug!(
                    "{}: numbering {} level {} has no definition",
                    self.part,
                    num.num_id,
                    num.level
                );
            }
            return Node::ListItem(ListItemRun {
                num_id: num.num_id,
                level: num.level,
                format,
                style,
                children: self.read_runs(p),
            });
        }

        let mut run_nodes = Vec::new();
        self.collect_run_nodes(p, &RunScope::default(), &mut run_nodes);

        if let Some(depth) = style
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .and_then(heading_depth)
        {
            match run_nodes.as_slice() {
                [] => {}
                [(single, _)] => {
                    return Node::Title(Title {
                        depth,
                        style,
                        content: TitleContent::Text(self.run_text(*single)),
                    });
                }
                _ => {
                    return Node::Title(Title {
                        depth,
                        style,
                        content: TitleContent::Runs(self.read_run_nodes(&run_nodes)),
                    });
                }
            }
        }

        let children = self.read_run_nodes(&run_nodes);
        if children.is_empty() {
            Node::TextBreak(style)
        } else {
            Node::Paragraph(Paragraph { style, children })
        }
    }

    fn read_runs(&self, p: roxmltree::Node) -> Vec<Node> {
        let mut run_nodes = Vec::new();
        self.collect_run_nodes(p, &RunScope::default(), &mut run_nodes);
        self.read_run_nodes(&run_nodes)
    }

    fn read_run_nodes(&self, run_nodes: &[(roxmltree::Node, RunScope)]) -> Vec<Node> {
        let mut out = Vec::new();
        for (run, scope) in run_nodes {
            self.read_run(*run, scope, &mut out);
        }
        out
    }

    /// Runs below `parent`, looking through hyperlink, revision, content control
    /// and smart tag wrappers.
    fn collect_run_nodes<'a>(
        &self,
        parent: roxmltree::Node<'a, 'a>,
        scope: &RunScope,
        out: &mut Vec<(roxmltree::Node<'a, 'a>, RunScope)>,
    ) {
        for child in parent.children().filter(|n| n.is_element()) {
            if child.tag_name().namespace() != Some(WML_NS) {
                continue;
            }
            match child.tag_name().name() {
                "r" => out.push((child, scope.clone())),
                "hyperlink" => {
                    let inner = RunScope {
                        link: self.link_target(child).or_else(|| scope.link.clone()),
                        change: scope.change.clone(),
                    };
                    self.collect_run_nodes(child, &inner, out);
                }
                "ins" => {
                    let inner = RunScope {
                        link: scope.link.clone(),
                        change: Some(tracked_change(child, ChangeKind::Insert)),
                    };
                    self.collect_run_nodes(child, &inner, out);
                }
                "del" => {
                    if !self.options.include_deleted_text {
                        continue;
                    }
                    let inner = RunScope {
                        link: scope.link.clone(),
                        change: Some(tracked_change(child, ChangeKind::Delete)),
                    };
                    self.collect_run_nodes(child, &inner, out);
                }
                "sdt" => {
                    if let Some(content) = wml(child, "sdtContent") {
                        self.collect_run_nodes(content, scope, out);
                    }
                }
                "smartTag" | "customXml" | "fldSimple" | "moveTo" => {
                    self.collect_run_nodes(child, scope, out)
                }
                _ => {}
            }
        }
    }

    fn link_target(&self, hyperlink: roxmltree::Node) -> Option<LinkTarget> {
        if let Some(rel_id) = hyperlink.attribute((REL_NS, "id")) {
            match self.rels.resolved_target(rel_id) {
                Some(url) => return Some(LinkTarget::Url(url)),
                None => log::warn!(
                    "{}: hyperlink relationship {rel_id} not found, link dropped",
                    self.part
                ),
            }
        }
        hyperlink
            .attribute((WML_NS, "anchor"))
            .map(|a| LinkTarget::Anchor(a.to_string()))
    }

    /// Append `child` to `text` if it is a character-level run child.
    fn push_text_piece(&self, child: roxmltree::Node, text: &mut String) -> bool {
        if child.tag_name().namespace() != Some(WML_NS) {
            return false;
        }
        match child.tag_name().name() {
            "t" | "delText" => text.push_str(child.text().unwrap_or("")),
            "tab" | "ptab" => text.push('\t'),
            "noBreakHyphen" => text.push('\u{2011}'),
            "sym" => {
                if let Some(c) = self.symbol(child) {
                    text.push(c);
                }
            }
            _ => return false,
        }
        true
    }

    /// Text content of a single run, for scalar titles.
    fn run_text(&self, run: roxmltree::Node) -> String {
        let mut text = String::new();
        for child in run.children().filter(|n| n.is_element()) {
            self.push_text_piece(child, &mut text);
        }
        text
    }

    /// Read one `w:r`, in content order. Text pieces are merged until something
    /// that is not text (a break, a note reference, an image) splits them.
    fn read_run(&self, run: roxmltree::Node, scope: &RunScope, out: &mut Vec<Node>) {
        let font = run_font(run);
        let mut text = String::new();

        for child in run.children().filter(|n| n.is_element()) {
            if self.push_text_piece(child, &mut text) {
                continue;
            }
            if child.tag_name().namespace() != Some(WML_NS) {
                // mc:AlternateContent around drawings.
                if child.tag_name().name() == "AlternateContent" {
                    flush_text(&mut text, &font, scope, out);
                    if let Some(drawing) = child.descendants().find(|n| is_wml(*n, "drawing")) {
                        out.extend(self.read_drawing(drawing).map(Node::Image));
                    } else if let Some(pict) = child.descendants().find(|n| is_wml(*n, "pict")) {
                        out.extend(self.read_pict(pict).map(Node::Image));
                    }
                }
                continue;
            }
            match child.tag_name().name() {
                "br" => {
                    flush_text(&mut text, &font, scope, out);
                    out.push(match child.attribute((WML_NS, "type")) {
                        Some("page") => Node::PageBreak,
                        _ => Node::TextBreak(None),
                    });
                }
                "cr" => {
                    flush_text(&mut text, &font, scope, out);
                    out.push(Node::TextBreak(None));
                }
                name @ ("footnoteReference" | "endnoteReference") => {
                    flush_text(&mut text, &font, scope, out);
                    let kind = if name == "footnoteReference" {
                        NoteKind::Footnote
                    } else {
                        NoteKind::Endnote
                    };
                    match child
                        .attribute((WML_NS, "id"))
                        .and_then(|v| v.parse::<i64>().ok())
                    {
                        Some(id) => out.push(Node::NoteReference(NoteReference { kind, id })),
                        None => log::debug!("{}: {name} without a numeric id", self.part),
                    }
                }
                "drawing" => {
                    flush_text(&mut text, &font, scope, out);
                    out.extend(self.read_drawing(child).map(Node::Image));
                }
                "pict" => {
                    flush_text(&mut text, &font, scope, out);
                    out.extend(self.read_pict(child).map(Node::Image));
                }
                "object" => {
                    flush_text(&mut text, &font, scope, out);
                    out.extend(self.read_object(child).map(Node::Object));
                }
                _ => {}
            }
        }
        flush_text(&mut text, &font, scope, out);
    }

    fn symbol(&self, sym: roxmltree::Node) -> Option<char> {
        let font = sym.attribute((WML_NS, "font"))?;
        let code = sym.attribute((WML_NS, "char"))?;
        let glyph = symbols::lookup(font, code);
        if glyph.is_none() {
            log::debug!("{}: no glyph for {font} {code}", self.part);
        }
        glyph
    }

    fn image_target(&self, rel_id: &str) -> Option<String> {
        let target = self.rels.resolved_target(rel_id);
        if target.is_none() {
            log::warn!(
                "{}: image relationship {rel_id} not found, image dropped",
                self.part
            );
        }
        target
    }

    fn read_drawing(&self, drawing: roxmltree::Node) -> Option<ImageRef> {
        let blip = find_descendant(drawing, DML_NS, "blip")?;
        let rel_id = blip
            .attribute((REL_NS, "embed"))
            .or_else(|| blip.attribute((REL_NS, "link")))?;
        let target = self.image_target(rel_id)?;

        let extent = find_descendant(drawing, WPD_NS, "extent");
        let emu = |attr: &str| {
            extent
                .and_then(|e| e.attribute(attr))
                .and_then(|v| v.parse::<i64>().ok())
                .map(Length::from_emu)
        };
        let description = find_descendant(drawing, WPD_NS, "docPr")
            .and_then(|d| d.attribute("descr"))
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Some(ImageRef {
            rel_id: rel_id.to_string(),
            target,
            width: emu("cx"),
            height: emu("cy"),
            description,
        })
    }

    fn read_pict(&self, pict: roxmltree::Node) -> Option<ImageRef> {
        let image_data = find_descendant(pict, VML_NS, "imagedata")?;
        let rel_id = image_data.attribute((REL_NS, "id"))?;
        let target = self.image_target(rel_id)?;

        let shape = image_data.parent().filter(|n| n.is_element());
        let style = shape.and_then(|s| s.attribute("style")).unwrap_or("");
        Some(ImageRef {
            rel_id: rel_id.to_string(),
            target,
            width: vml_style_length(style, "width"),
            height: vml_style_length(style, "height"),
            description: shape
                .and_then(|s| s.attribute("alt"))
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        })
    }

    fn read_object(&self, object: roxmltree::Node) -> Option<ObjectRef> {
        let ole = find_descendant(object, OFFICE_NS, "OLEObject")?;
        let rel_id = ole.attribute((REL_NS, "id"))?;
        let Some(target) = self.rels.resolved_target(rel_id) else {
            log::warn!(
                "{}: object relationship {rel_id} not found, object dropped",
                self.part
            );
            return None;
        };
        let preview = find_descendant(object, VML_NS, "imagedata")
            .and_then(|d| d.attribute((REL_NS, "id")))
            .and_then(|id| self.rels.resolved_target(id));
        Some(ObjectRef {
            rel_id: rel_id.to_string(),
            target,
            prog_id: ole.attribute("ProgID").map(str::to_string),
            preview,
        })
    }

    fn read_field_text(&self, p: roxmltree::Node, paragraph: Option<ParagraphStyle>) -> PreservedText {
        let mut field = FieldText::default();
        self.collect_field_text(p, &mut field);
        let (text, font) = field.finish();
        PreservedText {
            text,
            font,
            paragraph,
        }
    }

    fn collect_field_text(&self, node: roxmltree::Node, field: &mut FieldText) {
        for child in node.children().filter(|n| n.is_element()) {
            if child.tag_name().namespace() != Some(WML_NS) {
                continue;
            }
            match child.tag_name().name() {
                "pPr" | "rPr" | "sdtPr" | "fldData" => {}
                "fldSimple" => {
                    if let Some(instr) = child.attribute((WML_NS, "instr")) {
                        field.emit(instr);
                    }
                }
                "fldChar" => match child.attribute((WML_NS, "fldCharType")) {
                    Some("begin") => field.begin(),
                    Some("separate") => field.separate(),
                    Some("end") => field.end(),
                    _ => {}
                },
                "instrText" => field.instruction(child.text().unwrap_or("")),
                "t" | "delText" => field.literal(child.text().unwrap_or("")),
                "tab" => field.literal("\t"),
                "del" if !self.options.include_deleted_text => {}
                "r" => {
                    if field.font.is_none() {
                        field.font = run_font(child);
                    }
                    self.collect_field_text(child, field);
                }
                _ => self.collect_field_text(child, field),
            }
        }
    }
}
