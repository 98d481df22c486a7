use serde::{Deserialize, Serialize};

pub const QUESTION_COUNT: usize = 50;
pub const QUESTIONS_PER_CATEGORY: usize = 10;

/// Big Five trait dimension a statement belongs to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Ext,
    Est,
    Agr,
    Csn,
    Opn,
}

impl Category {
    /// Axis order used by the chart and the score list.
    pub const ALL: [Category; 5] = [
        Category::Ext,
        Category::Est,
        Category::Agr,
        Category::Csn,
        Category::Opn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Ext => "EXT",
            Category::Est => "EST",
            Category::Agr => "AGR",
            Category::Csn => "CSN",
            Category::Opn => "OPN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Section heading shown above the form group.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Ext => "Dışadönüklük (Extraversion)",
            Category::Est => "Duygusal Denge (Emotional Stability)",
            Category::Agr => "Uyumluluk (Agreeableness)",
            Category::Csn => "Sorumluluk (Conscientiousness)",
            Category::Opn => "Açıklık (Openness)",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Category::Ext => "Dışadönüklük",
            Category::Est => "Duygusal Denge",
            Category::Agr => "Uyumluluk",
            Category::Csn => "Sorumluluk",
            Category::Opn => "Açıklık",
        }
    }

    /// RGB chart color for this axis.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Category::Ext => (255, 99, 132),
            Category::Est => (54, 162, 235),
            Category::Agr => (255, 206, 86),
            Category::Csn => (75, 192, 192),
            Category::Opn => (153, 102, 255),
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub category: Category,
}

impl Question {
    /// Slot of this question's answer in the answer vector, or `None` when
    /// the id falls outside `1..=QUESTION_COUNT`.
    pub fn index(&self) -> Option<usize> {
        (self.id as usize)
            .checked_sub(1)
            .filter(|&index| index < QUESTION_COUNT)
    }
}

const fn q(id: u32, text: &'static str, category: Category) -> Question {
    Question { id, text, category }
}

static QUESTIONS: [Question; QUESTION_COUNT] = [
    // Dışadönüklük (EXT1-EXT10)
    q(1, "Partilerin gözdesi benim.", Category::Ext),
    q(2, "Çok konuşmam.", Category::Ext),
    q(3, "İnsanların yanında kendimi rahat hissederim.", Category::Ext),
    q(4, "Arka planda kalmayı tercih ederim.", Category::Ext),
    q(5, "Sohbetleri ben başlatırım.", Category::Ext),
    q(6, "Söyleyecek çok şeyim yoktur.", Category::Ext),
    q(7, "Partilerde birçok farklı insanla konuşurum.", Category::Ext),
    q(8, "Dikkat çekmekten hoşlanmam.", Category::Ext),
    q(9, "Dikkat merkezi olmaktan rahatsız olmam.", Category::Ext),
    q(10, "Yabancıların yanında sessiz kalırım.", Category::Ext),
    // Duygusal Denge (EST1-EST10)
    q(11, "Kolayca strese girerim.", Category::Est),
    q(12, "Çoğu zaman rahatımdır.", Category::Est),
    q(13, "Endişelenirim.", Category::Est),
    q(14, "Nadiren üzgün hissederim.", Category::Est),
    q(15, "Kolayca rahatsız olurum.", Category::Est),
    q(16, "Kolayca üzülürüm.", Category::Est),
    q(17, "Ruh halim sık sık değişir.", Category::Est),
    q(18, "Sık sık duygu değişimleri yaşarım.", Category::Est),
    q(19, "Kolayca sinirlenebilirim.", Category::Est),
    q(20, "Sık sık kendimi üzgün hissederim.", Category::Est),
    // Uyumluluk (AGR1-AGR10)
    q(21, "Başkalarının sorunlarıyla pek ilgilenmem.", Category::Agr),
    q(22, "İnsanlarla ilgilenirim.", Category::Agr),
    q(23, "İnsanları aşağılarım.", Category::Agr),
    q(24, "Başkalarının duygularıyla empati kurarım.", Category::Agr),
    q(25, "Başkalarının problemleriyle ilgilenmem.", Category::Agr),
    q(26, "Yumuşak kalpli biriyim.", Category::Agr),
    q(27, "Başkalarına karşı gerçekten ilgili değilim.", Category::Agr),
    q(28, "Başkalarına zaman ayırırım.", Category::Agr),
    q(29, "Başkalarının duygularını hissederim.", Category::Agr),
    q(30, "İnsanların kendilerini rahat hissetmelerini sağlarım.", Category::Agr),
    // Sorumluluk (CSN1-CSN10)
    q(31, "Her zaman hazırlıklıyımdır.", Category::Csn),
    q(32, "Eşyalarımı ortalıkta bırakırım.", Category::Csn),
    q(33, "Detaylara dikkat ederim.", Category::Csn),
    q(34, "İşleri karmakarışık hale getiririm.", Category::Csn),
    q(35, "Görevlerimi hemen yaparım.", Category::Csn),
    q(36, "Sıklıkla eşyaları yerlerine koymayı unuturum.", Category::Csn),
    q(37, "Düzeni severim.", Category::Csn),
    q(38, "Sorumluluklarımdan kaçarım.", Category::Csn),
    q(39, "Bir programa göre hareket ederim.", Category::Csn),
    q(40, "İşimde titizimdir.", Category::Csn),
    // Açıklık (OPN1-OPN10)
    q(41, "Zengin bir kelime dağarcığına sahibim.", Category::Opn),
    q(42, "Soyut fikirleri anlamakta zorlanırım.", Category::Opn),
    q(43, "Canlı bir hayal gücüm var.", Category::Opn),
    q(44, "Soyut fikirlerle ilgilenmem.", Category::Opn),
    q(45, "Mükemmel fikirlerim var.", Category::Opn),
    q(46, "İyi bir hayal gücüm yoktur.", Category::Opn),
    q(47, "Hızlı kavrarım.", Category::Opn),
    q(48, "Karmaşık kelimeler kullanırım.", Category::Opn),
    q(49, "Düşünmeye zaman ayırırım.", Category::Opn),
    q(50, "Fikirlerle doluyum.", Category::Opn),
];

/// The full catalog in declaration order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
