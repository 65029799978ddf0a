//! Built-in dictionary of common words.
//!
//! Each word is declared once with its annotation tags. The declaration
//! generates both the [`Word`] enumeration, used at call sites as an opaque
//! key, and [`BUILTIN_FIELDS`], the field table the dictionary is built from.
//!
//! ## Adding a word
//!
//! Add a `Name => r#"es:"..."#,` line below. The English value is derived
//! from the name (`ZipCode` becomes "zip code"); only other languages need
//! tags. The tags of the first word decide which languages the built-in
//! dictionary supports.

use crate::i18n::case::snake_case;
use crate::i18n::dictionary::Field;

macro_rules! words {
    ($($word:ident => $tags:literal,)*) => {
        /// A word of the built-in dictionary.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Word {
            $($word,)*
        }

        impl Word {
            /// Every word, in declaration order.
            pub const ALL: &'static [Word] = &[$(Word::$word,)*];

            /// Declared name, e.g. `"NotSupported"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Word::$word => stringify!($word),)*
                }
            }

            /// Raw annotation tags.
            pub const fn tags(self) -> &'static str {
                match self {
                    $(Word::$word => $tags,)*
                }
            }
        }

        /// Field table of the built-in dictionary.
        pub const BUILTIN_FIELDS: &[Field<'static>] = &[
            $(Field::new(stringify!($word), $tags),)*
        ];
    };
}

words! {
    Address => r#"es:"dirección""#,
    Allowed => r#"es:"permitido""#,
    April => r#"es:"Abril""#,
    Argument => r#"es:"argumento""#,
    AsAPointer => r#"es:"como puntero""#,
    August => r#"es:"Agosto""#,
    BirthDate => r#"es:"fecha de nacimiento""#,
    Char => r#"es:"carácter""#,
    Chars => r#"es:"caracteres""#,
    City => r#"es:"ciudad""#,
    ConfirmPassword => r#"es:"confirmar contraseña""#,
    Country => r#"es:"país""#,
    Date => r#"es:"fecha""#,
    Day => r#"es:"día""#,
    DayCannotBeZero => r#"es:"día no puede ser cero""#,
    Days => r#"es:"días""#,
    December => r#"es:"Diciembre""#,
    Dictionary => r#"es:"diccionario""#,
    Digit => r#"es:"dígito""#,
    DoesNotExist => r#"es:"no existe""#,
    DoesNotHave => r#"es:"no tiene""#,
    DoNotStartWith => r#"es:"no debe comenzar con""#,
    Email => r#"es:"correo electrónico""#,
    Empty => r#"es:"vacío""#,
    Example => r#"es:"ejemplo""#,
    February => r#"es:"Febrero""#,
    Female => r#"es:"Femenino""#,
    Field => r#"es:"campo""#,
    Format => r#"es:"Formato""#,
    Gender => r#"es:"género""#,
    Hour => r#"es:"hora""#,
    HyphenMissing => r#"es:"guion faltante""#,
    In => r#"es:"en""#,
    Index => r#"es:"índice""#,
    InvalidDateFormat => r#"es:"formato de fecha ingresado incorrecto""#,
    Is => r#"es:"es""#,
    IsNotOfPointerType => r#"es:"no es del tipo puntero""#,
    IsNotOfStructureType => r#"es:"no es del tipo estructura""#,
    IsNotRequired => r#"es:"no es requerido""#,
    January => r#"es:"Enero""#,
    July => r#"es:"Julio""#,
    June => r#"es:"Junio""#,
    Language => r#"es:"idioma""#,
    LastName => r#"es:"apellido""#,
    Letters => r#"es:"letras""#,
    Male => r#"es:"Masculino""#,
    March => r#"es:"Marzo""#,
    MaxSize => r#"es:"tamaño máximo""#,
    May => r#"es:"Mayo""#,
    MinSize => r#"es:"tamaño mínimo""#,
    Month => r#"es:"mes""#,
    MonthOutOfRange => r#"es:"mes fuera de rango""#,
    Name => r#"es:"nombre""#,
    Newline => r#"es:"salto de linea""#,
    Nil => r#"es:"nulo""#,
    NotAllowed => r#"es:"no permitido""#,
    NotFound => r#"es:"no encontrado""#,
    NotSupported => r#"es:"no soportado""#,
    NotValidIndex => r#"es:"índice no válido""#,
    NotLetter => r#"es:"no es una letra""#,
    NotNumber => r#"es:"no es un numero""#,
    NotValid => r#"es:"no es valido""#,
    November => r#"es:"Noviembre""#,
    Numbers => r#"es:"números""#,
    OutOfRange => r#"es:"fuera de rango""#,
    October => r#"es:"Octubre""#,
    Parameter => r#"es:"parámetro""#,
    Password => r#"es:"contraseña""#,
    Phone => r#"es:"teléfono""#,
    Pointer => r#"es:"puntero""#,
    RequiredSelection => r#"es:"selección requerida""#,
    Select => r#"es:"seleccionar""#,
    September => r#"es:"Septiembre""#,
    Space => r#"es:"espacio""#,
    TabText => r#"es:"tabulation de texto""#,
    Terms => r#"es:"términos y condiciones""#,
    Text => r#"es:"texto""#,
    TheElement => r#"es:"el elemento""#,
    TheStructure => r#"es:"la estructura""#,
    TildeNotAllowed => r#"es:"tilde no permitida""#,
    Unknown => r#"es:"desconocido""#,
    UnsupportedType => r#"es:"tipo no soportado""#,
    Value => r#"es:"valor""#,
    Verifier => r#"es:"verificador""#,
    WhiteSpace => r#"es:"espacio en blanco""#,
    Year => r#"es:"año""#,
    YearOutOfRange => r#"es:"año fuera de rango""#,
    ZipCode => r#"es:"código postal""#,
}

impl Word {
    /// Canonical dictionary key, e.g. `"not_supported"`.
    pub fn key(self) -> String {
        snake_case(self.name())
    }

    pub fn field(self) -> Field<'static> {
        Field::new(self.name(), self.tags())
    }
}
