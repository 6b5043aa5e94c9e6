//! Embedded default rule tables.
//!
//! Each table is TOML so the closed mappings stay declarative data, parsed
//! and validated once at startup. Keys of the phonological tables are
//! canonical mora keys (`Mora::key`).

/// Hiragana → romaji. Voicing is preserved here; devoicing is a property of
/// the minimal-phonology target only. Both ず and づ map to "zu", which is
/// the one ambiguous mora downstream.
pub(crate) const KANA_TOML: &str = r#"
[mappings]
"あ" = "a"
"い" = "i"
"う" = "u"
"え" = "e"
"お" = "o"

"か" = "ka"
"き" = "ki"
"く" = "ku"
"け" = "ke"
"こ" = "ko"
"きゃ" = "kya"
"きゅ" = "kyu"
"きょ" = "kyo"

"さ" = "sa"
"し" = "shi"
"す" = "su"
"せ" = "se"
"そ" = "so"
"しゃ" = "sha"
"しゅ" = "shu"
"しょ" = "sho"

"た" = "ta"
"ち" = "chi"
"つ" = "tsu"
"て" = "te"
"と" = "to"
"ちゃ" = "cha"
"ちゅ" = "chu"
"ちょ" = "cho"

"な" = "na"
"に" = "ni"
"ぬ" = "nu"
"ね" = "ne"
"の" = "no"
"にゃ" = "nya"
"にゅ" = "nyu"
"にょ" = "nyo"

"は" = "ha"
"ひ" = "hi"
"ふ" = "fu"
"へ" = "he"
"ほ" = "ho"
"ひゃ" = "hya"
"ひゅ" = "hyu"
"ひょ" = "hyo"

"ま" = "ma"
"み" = "mi"
"む" = "mu"
"め" = "me"
"も" = "mo"
"みゃ" = "mya"
"みゅ" = "myu"
"みょ" = "myo"

"や" = "ya"
"ゆ" = "yu"
"よ" = "yo"

"ら" = "ra"
"り" = "ri"
"る" = "ru"
"れ" = "re"
"ろ" = "ro"
"りゃ" = "rya"
"りゅ" = "ryu"
"りょ" = "ryo"

"わ" = "wa"
"ゐ" = "wi"
"ゑ" = "we"
"を" = "wo"

"ん" = "n"

"が" = "ga"
"ぎ" = "gi"
"ぐ" = "gu"
"げ" = "ge"
"ご" = "go"
"ぎゃ" = "gya"
"ぎゅ" = "gyu"
"ぎょ" = "gyo"

"ざ" = "za"
"じ" = "ji"
"ず" = "zu"
"ぜ" = "ze"
"ぞ" = "zo"
"じゃ" = "ja"
"じゅ" = "ju"
"じょ" = "jo"

"だ" = "da"
"ぢ" = "ji"
"づ" = "zu"
"で" = "de"
"ど" = "do"
"ぢゃ" = "ja"
"ぢゅ" = "ju"
"ぢょ" = "jo"

"ば" = "ba"
"び" = "bi"
"ぶ" = "bu"
"べ" = "be"
"ぼ" = "bo"
"びゃ" = "bya"
"びゅ" = "byu"
"びょ" = "byo"

"ぱ" = "pa"
"ぴ" = "pi"
"ぷ" = "pu"
"ぺ" = "pe"
"ぽ" = "po"
"ぴゃ" = "pya"
"ぴゅ" = "pyu"
"ぴょ" = "pyo"
"#;

/// Mora key → strict-CV fragment(s) for the minimal-phonology target.
///
/// Devoicing (g→k, z→s, d→t, b→p) and the fixed substitutions (r→l, chi→si,
/// tsu→tu) are encoded as data. "zu" is the single multi-valued entry: it is
/// ambiguous between two unvoiced sources and emits both, "su" first.
/// h-initial fragments are left as-is; the positional h→k/p rule runs in the
/// emitter. The [diphthongs] section smooths adjacent vowel letters across
/// fragment boundaries (the target allows no vowel clusters).
pub(crate) const MINIMAL_TOML: &str = r#"
[mappings]
a = "a"
i = "i"
u = "u"
e = "e"
o = "o"

ka = "ka"
ki = "ki"
ku = "ku"
ke = "ke"
ko = "ko"
sa = "sa"
shi = "si"
su = "su"
se = "se"
so = "so"
ta = "ta"
chi = "si"
tsu = "tu"
tu = "tu"
te = "te"
to = "to"
na = "na"
ni = "ni"
nu = "nu"
ne = "ne"
no = "no"
ma = "ma"
mi = "mi"
mu = "mu"
me = "me"
mo = "mo"
pa = "pa"
pi = "pi"
pu = "pu"
pe = "pe"
po = "po"
ya = "ja"
yu = "ju"
yo = "jo"
ra = "la"
ri = "li"
ru = "lu"
re = "le"
ro = "lo"
wa = "wa"
wi = "wi"
we = "we"
wo = "wo"
n = "n"

ga = "ka"
gi = "ki"
gu = "ku"
ge = "ke"
go = "ko"
za = "sa"
ji = "si"
zu = ["su", "tu"]
ze = "se"
zo = "so"
da = "ta"
di = "si"
du = "tu"
de = "te"
do = "to"
ba = "pa"
bi = "pi"
bu = "pu"
be = "pe"
bo = "po"

ha = "ha"
hi = "hi"
hu = "pu"
fu = "pu"
he = "he"
ho = "ho"

kya = "kija"
kyu = "kiju"
kyo = "kijo"
sha = "sija"
shu = "siju"
sho = "sijo"
cha = "teja"
chu = "teju"
cho = "tejo"
nya = "na"
nyu = "niyu"
nyo = "no"
hya = "kija"
hyu = "kiju"
hyo = "kijo"
mya = "mija"
myu = "miju"
myo = "mijo"
rya = "liya"
ryu = "liyu"
ryo = "liyo"
gya = "kija"
gyu = "kiju"
gyo = "kijo"
ja = "sija"
ju = "siju"
jo = "sijo"
bya = "pija"
byu = "piju"
byo = "pijo"
pya = "pija"
pyu = "piju"
pyo = "pijo"
dya = "teja"
dyu = "teju"
dyo = "tejo"

[diphthongs]
aa = "a"
ai = "a"
au = "a"
ae = "awe"
ao = "o"
ia = "ija"
ii = "i"
iu = "iju"
ie = "ije"
io = "ijo"
ua = "uwa"
ui = "uwi"
uu = "u"
ue = "uwe"
uo = "o"
ea = "eja"
ei = "e"
eu = "eju"
ee = "e"
eo = "ejo"
oa = "owa"
oi = "owi"
ou = "o"
oe = "owe"
oo = "o"
"#;

/// Mora key → hangul syllable block for the voicing-preserving featural
/// target. "n" maps to the bare coda jamo; the emitter merges it as batchim
/// into the preceding block.
pub(crate) const FEATURAL_TOML: &str = r#"
[mappings]
a = "아"
i = "이"
u = "우"
e = "에"
o = "오"

ka = "카"
ki = "키"
ku = "쿠"
ke = "케"
ko = "코"
sa = "사"
shi = "시"
su = "스"
se = "세"
so = "소"
ta = "타"
chi = "치"
tsu = "쓰"
tu = "쓰"
te = "테"
to = "토"
na = "나"
ni = "니"
nu = "누"
ne = "네"
no = "노"
ha = "하"
hi = "히"
hu = "후"
fu = "후"
he = "헤"
ho = "호"
ma = "마"
mi = "미"
mu = "무"
me = "메"
mo = "모"
ya = "야"
yu = "유"
yo = "요"
ra = "라"
ri = "리"
ru = "루"
re = "레"
ro = "로"
wa = "와"
wi = "위"
we = "웨"
wo = "오"
n = "ㄴ"

ga = "가"
gi = "기"
gu = "구"
ge = "게"
go = "고"
za = "자"
ji = "지"
zu = "즈"
ze = "제"
zo = "조"
da = "다"
di = "지"
du = "즈"
de = "데"
do = "도"
ba = "바"
bi = "비"
bu = "부"
be = "베"
bo = "보"
pa = "파"
pi = "피"
pu = "푸"
pe = "페"
po = "포"

kya = "캬"
kyu = "큐"
kyo = "쿄"
sha = "샤"
shu = "슈"
sho = "쇼"
cha = "차"
chu = "추"
cho = "초"
nya = "냐"
nyu = "뉴"
nyo = "뇨"
hya = "햐"
hyu = "휴"
hyo = "효"
mya = "먀"
myu = "뮤"
myo = "묘"
rya = "랴"
ryu = "류"
ryo = "료"
gya = "갸"
gyu = "규"
gyo = "교"
ja = "자"
ju = "주"
jo = "조"
bya = "뱌"
byu = "뷰"
byo = "뵤"
pya = "퍄"
pyu = "퓨"
pyo = "표"
dya = "댜"
dyu = "듀"
dyo = "됴"
"#;

/// Kana → logograph substitution (man'yōgana-style phonetic characters).
/// Keys may be one or two characters; two-character entries win. An empty
/// value deletes the kana (sokuon, long-vowel mark). Characters without an
/// entry are left for the external variant converter to handle.
pub(crate) const LOGOGRAPHIC_TOML: &str = r#"
[mappings]
"ヶ丘" = "个丘"
"ヶ" = "个"

"あ" = "阿"
"い" = "伊"
"う" = "宇"
"え" = "江"
"お" = "於"
"か" = "加"
"き" = "纪"
"く" = "久"
"け" = "気"
"こ" = "古"
"さ" = "佐"
"し" = "志"
"す" = "须"
"せ" = "世"
"そ" = "曽"
"た" = "多"
"ち" = "知"
"つ" = "津"
"て" = "天"
"と" = "都"
"な" = "奈"
"に" = "仁"
"ぬ" = "奴"
"ね" = "祢"
"の" = "之"
"は" = "波"
"ひ" = "比"
"ふ" = "布"
"へ" = "部"
"ほ" = "保"
"ま" = "万"
"み" = "美"
"む" = "武"
"め" = "女"
"も" = "茂"
"や" = "也"
"ゆ" = "由"
"よ" = "与"
"ら" = "良"
"り" = "利"
"る" = "留"
"れ" = "礼"
"ろ" = "路"
"わ" = "和"
"ゐ" = "為"
"ゑ" = "恵"
"を" = "乎"
"ん" = "无"

"ア" = "阿"
"イ" = "伊"
"ウ" = "宇"
"エ" = "江"
"オ" = "於"
"カ" = "加"
"キ" = "纪"
"ク" = "久"
"ケ" = "気"
"コ" = "古"
"サ" = "佐"
"シ" = "志"
"ス" = "须"
"セ" = "世"
"ソ" = "曽"
"タ" = "多"
"チ" = "知"
"ツ" = "津"
"テ" = "天"
"ト" = "都"
"ナ" = "奈"
"ニ" = "仁"
"ヌ" = "奴"
"ネ" = "祢"
"ノ" = "之"
"ハ" = "波"
"ヒ" = "比"
"フ" = "布"
"ヘ" = "部"
"ホ" = "保"
"マ" = "万"
"ミ" = "美"
"ム" = "武"
"メ" = "女"
"モ" = "茂"
"ヤ" = "也"
"ユ" = "由"
"ヨ" = "与"
"ラ" = "良"
"リ" = "利"
"ル" = "留"
"レ" = "礼"
"ロ" = "路"
"ワ" = "和"
"ヰ" = "為"
"ヱ" = "恵"
"ヲ" = "乎"
"ン" = "无"

"が" = "贺"
"ぎ" = "义"
"ぐ" = "具"
"げ" = "下"
"ご" = "吾"
"ざ" = "座"
"じ" = "治"
"ず" = "头"
"ぜ" = "是"
"ぞ" = "曽"
"だ" = "太"
"ぢ" = "治"
"づ" = "津"
"で" = "出"
"ど" = "土"
"ば" = "马"
"び" = "尾"
"ぶ" = "武"
"べ" = "部"
"ぼ" = "母"
"ぱ" = "波"
"ぴ" = "比"
"ぷ" = "布"
"ぺ" = "部"
"ぽ" = "保"

"ガ" = "贺"
"ギ" = "义"
"グ" = "具"
"ゲ" = "下"
"ゴ" = "吾"
"ザ" = "座"
"ジ" = "治"
"ズ" = "头"
"ゼ" = "是"
"ゾ" = "曽"
"ダ" = "太"
"ヂ" = "治"
"ヅ" = "津"
"デ" = "出"
"ド" = "土"
"バ" = "马"
"ビ" = "尾"
"ブ" = "武"
"ベ" = "部"
"ボ" = "母"
"パ" = "波"
"ピ" = "比"
"プ" = "布"
"ペ" = "部"
"ポ" = "保"

"っ" = ""
"ッ" = ""
"ー" = ""
"ゃ" = "也"
"ゅ" = "由"
"ょ" = "与"
"ャ" = "也"
"ュ" = "由"
"ョ" = "与"
"ぁ" = "阿"
"ぃ" = "伊"
"ぅ" = "宇"
"ぇ" = "江"
"ぉ" = "於"
"ァ" = "阿"
"ィ" = "伊"
"ゥ" = "宇"
"ェ" = "江"
"ォ" = "於"
"#;
