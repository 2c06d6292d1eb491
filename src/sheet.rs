use crate::config::{SheetConfig, SheetLabels};
use crate::error::SheetError;
use crate::record::{InvoiceRecord, Party};
use taxsheet_layout::{
    BarcodeElement, Block, Column, DocumentLayout, Field, FlexibleLine, LayoutConfig,
    PageTemplate, RenderSummary, Span, Table, TableBlock, TableSpec, TextAlign, VerticalStack,
};
use taxsheet_traits::Surface;

pub const IDENTIFICATION: &str = "identification";
pub const PARTIES: &str = "parties";
pub const PAYMENT: &str = "payment";
pub const VAT_RECAP: &str = "vat-recap";
pub const TOTALS: &str = "totals";
pub const NOTES: &str = "notes";

const TITLE_SIZE: f32 = 12.0;
const BARCODE_WIDTH: f32 = 160.0;
const SIGNATURE_HEIGHT: f32 = 34.0;

/// Builds the block tree of an invoice cover sheet.
///
/// The first page carries identification, parties and payment at the top and
/// the VAT recapitulation, totals and notes at the bottom. Every following
/// page repeats only the identification block; the items table flows through
/// the space left in between.
pub struct CoverSheet<'a> {
    record: &'a InvoiceRecord,
    labels: &'a SheetLabels,
    layout: &'a LayoutConfig,
}

impl<'a> CoverSheet<'a> {
    pub fn build(
        record: &'a InvoiceRecord,
        config: &'a SheetConfig,
    ) -> Result<DocumentLayout, SheetError> {
        record.validate()?;
        let sheet = CoverSheet {
            record,
            labels: &config.labels,
            layout: &config.layout,
        };

        let mut first = PageTemplate::new()
            .with_top(sheet.identification()?)
            .with_top(sheet.parties()?)
            .with_top(sheet.payment()?);
        if !record.vat_recap.is_empty() {
            first = first.with_bottom(sheet.vat_recap()?);
        }
        first = first
            .with_bottom(sheet.totals()?)
            .with_bottom(sheet.notes()?);

        // same id as on the first page, so the rendered object is reused
        let continuation = PageTemplate::new().with_top(sheet.identification()?);

        Ok(DocumentLayout::new(
            config.layout.clone(),
            first,
            continuation,
            sheet.items()?,
        ))
    }

    fn width(&self) -> f32 {
        self.layout.content_width()
    }

    fn field(&self, header: &str, value: &str) -> Field {
        Field::new(header, value, self.layout)
    }

    fn identification(&self) -> Result<Block, SheetError> {
        let id = &self.record.identification;
        let labels = self.labels;
        let mut block = Block::new(IDENTIFICATION, self.width(), self.layout)
            .with_header(&labels.identification);

        let title = Field::value_only(&labels.title, self.layout)
            .bold()
            .font_size(TITLE_SIZE)
            .framed(false);
        match id.barcode_digits() {
            Some(digits) => block.add_row(
                FlexibleLine::new([Span::Fill, Span::Fixed(BARCODE_WIDTH)])
                    .with(title)
                    .with(BarcodeElement::new(&digits, self.layout)?),
            )?,
            None => block.add_element(title),
        }

        block.add_row(
            FlexibleLine::new([
                Span::Fixed(130.0),
                Span::Fill,
                Span::MatchPrevious,
                Span::MatchPrevious,
                Span::MatchPrevious,
            ])
            .with(self.field(&labels.number, &id.number).bold())
            .with(self.field(&labels.issue_date, &id.issue_date))
            .with(self.field(&labels.supply_date, &id.supply_date))
            .with(self.field(&labels.due_date, &id.due_date))
            .with(self.field(&labels.order_reference, &id.order_reference)),
        )?;
        Ok(block)
    }

    fn party(&self, header: &str, party: &Party) -> VerticalStack {
        let labels = self.labels;
        let mut ids = FlexibleLine::equal(2);
        ids.push(self.field(&labels.tax_id, &party.tax_id));
        ids.push(self.field(&labels.registration_id, &party.registration_id));

        VerticalStack::new()
            .with(self.field(header, &party.name).bold())
            .with(self.field(&labels.address, &party.address_text()).wrapped())
            .with(ids)
    }

    fn parties(&self) -> Result<Block, SheetError> {
        let mut block = Block::new(PARTIES, self.width(), self.layout);
        block.add_row(
            FlexibleLine::equal(2)
                .with(self.party(&self.labels.supplier, &self.record.supplier))
                .with(self.party(&self.labels.recipient, &self.record.recipient)),
        )?;
        Ok(block)
    }

    fn payment(&self) -> Result<Block, SheetError> {
        let payment = &self.record.payment;
        let labels = self.labels;
        let mut block =
            Block::new(PAYMENT, self.width(), self.layout).with_header(&labels.payment);
        block.add_row(
            FlexibleLine::new([Span::Fill, Span::Fill, Span::Fill, Span::Fixed(60.0)])
                .with(self.field(&labels.payment_method, &payment.method))
                .with(self.field(&labels.bank_account, &payment.bank_account))
                .with(self.field(&labels.payment_reference, &payment.reference))
                .with(self.field(&labels.currency, &payment.currency)),
        )?;
        Ok(block)
    }

    fn vat_recap(&self) -> Result<Block, SheetError> {
        let labels = self.labels;
        let mut block =
            Block::new(VAT_RECAP, self.width(), self.layout).with_header(&labels.vat_recap);
        for (i, row) in self.record.vat_recap.iter().enumerate() {
            // captions on the first line only
            let caption = |label: &str| if i == 0 { label.to_string() } else { String::new() };
            block.add_row(
                FlexibleLine::new([Span::Fixed(80.0), Span::Fill, Span::Fill, Span::Fill])
                    .with(self.field(&caption(&labels.vat_rate), &row.rate))
                    .with(self.field(&caption(&labels.vat_base), &row.base).numeric())
                    .with(self.field(&caption(&labels.vat_tax), &row.tax).numeric())
                    .with(self.field(&caption(&labels.vat_total), &row.total).numeric()),
            )?;
        }
        Ok(block)
    }

    fn totals(&self) -> Result<Block, SheetError> {
        let totals = &self.record.totals;
        let labels = self.labels;
        let mut block = Block::new(TOTALS, self.width(), self.layout).with_header(&labels.totals);
        block.add_row(
            FlexibleLine::equal(4)
                .with(self.field(&labels.total_base, &totals.base).numeric())
                .with(self.field(&labels.total_vat, &totals.vat).numeric())
                .with(self.field(&labels.rounding, &totals.rounding).numeric())
                .with(self.field(&labels.amount_due, &totals.due).numeric().bold()),
        )?;
        Ok(block)
    }

    fn notes(&self) -> Result<Block, SheetError> {
        let labels = self.labels;
        let mut block = Block::new(NOTES, self.width(), self.layout);
        block.add_row(
            FlexibleLine::new([Span::Fill, Span::Fixed(self.width() * 0.3)])
                .with(self.field(&labels.notes, &self.record.notes).wrapped())
                .with(
                    self.field(&labels.issued_by, &self.record.issued_by)
                        .min_height(SIGNATURE_HEIGHT),
                ),
        )?;
        Ok(block)
    }

    fn items(&self) -> Result<TableBlock, SheetError> {
        let labels = self.labels;
        let spec = TableSpec::new(vec![
            Column::fixed(&labels.item_code, 0.10),
            Column::flexible(&labels.item_description),
            Column::fixed(&labels.item_quantity, 0.08).align(TextAlign::Right),
            Column::fixed(&labels.item_unit, 0.07),
            Column::fixed(&labels.item_unit_price, 0.13).align(TextAlign::Right),
            Column::fixed(&labels.item_vat_rate, 0.08).align(TextAlign::Right),
            Column::fixed(&labels.item_total, 0.14).align(TextAlign::Right),
        ])?;
        let rows = self.record.items.iter().map(|item| item.cells()).collect();
        let table = Table::new(spec, rows, self.layout)?;
        Ok(TableBlock::new(&labels.items, table, self.layout)
            .with_continued_label(&labels.continued))
    }
}

/// Lays out `record` and draws every page onto `surface`.
pub fn render_cover_sheet(
    record: &InvoiceRecord,
    config: &SheetConfig,
    surface: &mut dyn Surface,
) -> Result<RenderSummary, SheetError> {
    let mut document = CoverSheet::build(record, config)?;
    let summary = document.render(surface)?;
    log::info!(
        "Cover sheet for '{}': {} page(s), {} item(s)",
        record.identification.number,
        summary.page_count(),
        summary.total_rows
    );
    Ok(summary)
}
