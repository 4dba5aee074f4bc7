use std::fmt;

use serde::{Deserialize, Serialize};

/// The eleven document templates of an SPJ bundle, in chain order.
///
/// Every document except [`Faktur`](Self::Faktur) has its own number in
/// [`LetterNumberSet`](super::LetterNumberSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpjDocument {
    /// Invoice.
    Faktur,
    /// First price offer.
    SuratPenawaran1,
    /// Comparison price offer.
    SuratPenawaran2,
    /// Purchase order.
    SuratPesanan,
    /// Price negotiation letter.
    SuratNegosiasi,
    /// Handover minutes of the negotiation.
    #[serde(rename = "suratBASTNego")]
    BastNegosiasi,
    /// Work order (Surat Perintah Kerja).
    Spk,
    /// Goods inspection minutes (Berita Acara Pemeriksaan Barang).
    Bapb,
    /// Delivery note.
    SuratJalan,
    /// Goods handover minutes (Berita Acara Serah Terima Barang).
    Bastb,
    /// Receipt.
    Kwitansi,
}

impl SpjDocument {
    /// All templates in chain order.
    pub const ALL: [SpjDocument; 11] = [
        Self::Faktur,
        Self::SuratPenawaran1,
        Self::SuratPenawaran2,
        Self::SuratPesanan,
        Self::SuratNegosiasi,
        Self::BastNegosiasi,
        Self::Spk,
        Self::Bapb,
        Self::SuratJalan,
        Self::Bastb,
        Self::Kwitansi,
    ];

    /// Title printed on the document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Faktur => "Faktur",
            Self::SuratPenawaran1 => "Surat Penawaran Harga",
            Self::SuratPenawaran2 => "Surat Penawaran Harga Pembanding",
            Self::SuratPesanan => "Surat Pesanan",
            Self::SuratNegosiasi => "Surat Negosiasi Harga",
            Self::BastNegosiasi => "Berita Acara Hasil Negosiasi",
            Self::Spk => "Surat Perintah Kerja",
            Self::Bapb => "Berita Acara Pemeriksaan Barang",
            Self::SuratJalan => "Surat Jalan",
            Self::Bastb => "Berita Acara Serah Terima Barang",
            Self::Kwitansi => "Kwitansi",
        }
    }

    /// Record key of the document's number (e.g. "suratPesanan").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Faktur => "noFaktur",
            Self::SuratPenawaran1 => "suratPenawaran1",
            Self::SuratPenawaran2 => "suratPenawaran2",
            Self::SuratPesanan => "suratPesanan",
            Self::SuratNegosiasi => "suratNegosiasi",
            Self::BastNegosiasi => "suratBASTNego",
            Self::Spk => "spk",
            Self::Bapb => "bapb",
            Self::SuratJalan => "suratJalan",
            Self::Bastb => "bastb",
            Self::Kwitansi => "kwitansi",
        }
    }

    /// Whether the number is an office-letter sequence (`NNN/PK.01.01/IV/2025`)
    /// rather than a code derived from the invoice number.
    pub fn is_office_letter(&self) -> bool {
        matches!(
            self,
            Self::SuratPesanan | Self::SuratNegosiasi | Self::BastNegosiasi | Self::Spk | Self::Bapb
        )
    }
}

impl fmt::Display for SpjDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
