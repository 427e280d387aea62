pub mod common {
    pub const LOADING: &str = "Ładowanie…";
    pub const ERROR_TITLE: &str = "Błąd";
    pub const STATUS_ERROR_TEMPLATE: &str = "Błąd {}";
    pub const SERVER_ERROR: &str = "Błąd serwera";
    pub const CONNECTION_FAILED: &str = "Błąd połączenia z serwerem";
    pub const CANCEL: &str = "Anuluj";
    pub const DELETE: &str = "Usuń";
    pub const EDIT: &str = "Edytuj";
    pub const SAVE: &str = "Zapisz";
    pub const CONFIRM_HINT: &str = "[t/N]";
}

pub mod article {
    pub const UNTITLED: &str = "(bez tytułu)";
    pub const AUTHOR_FALLBACK: &str = "Autor";
    pub const LOAD_FAILED: &str = "Nie udało się wczytać artykułu.";
    pub const EDIT_ARTICLE: &str = "Edytuj artykuł";
    pub const DELETE_ARTICLE: &str = "Usuń artykuł";
    pub const DELETE_CONFIRM: &str =
        "Na pewno usunąć ten artykuł? Tej operacji nie można cofnąć.";
    pub const DELETED: &str = "Artykuł został usunięty.";
    pub const DELETE_FORBIDDEN: &str = "Brak uprawnień do usunięcia.";
    pub const DELETE_FAILED: &str = "Nie udało się usunąć artykułu.";
    pub const COMMENT_COUNT_TEMPLATE: &str = "Komentarze: {}";
    pub const IMAGES: &str = "Zdjęcia";
    pub const BACK: &str = "Powrót";
    pub const HISTORY_BACK: &str = "poprzednia strona";
    pub const MONTHS_GENITIVE: [&str; 12] = [
        "stycznia",
        "lutego",
        "marca",
        "kwietnia",
        "maja",
        "czerwca",
        "lipca",
        "sierpnia",
        "września",
        "października",
        "listopada",
        "grudnia",
    ];
}

pub mod like {
    pub const LABEL_LIKED: &str = "Lubisz";
    pub const LABEL_NOT_LIKED: &str = "Lubię to";
    pub const ARIA_UNLIKE: &str = "Cofnij polubienie";
    pub const ARIA_LIKE: &str = "Polub artykuł";
    pub const SAVE_FAILED: &str = "Nie udało się zapisać polubienia.";
    pub const UNAVAILABLE: &str = "Polubić mogą tylko zalogowani czytelnicy, którzy nie są autorami.";
}

pub mod comments {
    pub const LOADING: &str = "Ładowanie komentarzy…";
    pub const EMPTY: &str = "Brak komentarzy.";
    pub const LOAD_FAILED: &str = "Błąd ładowania komentarzy";
    pub const ANONYMOUS: &str = "Anonim";
    pub const TOO_SHORT_ON_SUBMIT: &str = "Komentarz musi mieć przynajmniej 6 znaków.";
    pub const TOO_SHORT_ON_EDIT: &str = "Komentarz musi mieć co najmniej 6 znaków.";
    pub const DELETE_CONFIRM: &str = "Usunąć ten komentarz?";
    pub const DELETED: &str = "Komentarz usunięty.";
    pub const DELETE_FAILED: &str = "Błąd usuwania komentarza.";
    pub const UPDATED: &str = "Komentarz zaktualizowany.";
    pub const SAVE_FAILED: &str = "Błąd zapisu komentarza.";
    pub const NOT_EDITABLE: &str = "Nie możesz edytować tego komentarza.";
    /// Server messages after which the draft is cleared instead of kept.
    pub const REJECTED_DRAFT_PATTERN: &str =
        r"(?i)pusty po odfiltrowaniu|co najmniej 6 znaków|nie może być pusty";
}

pub mod admin {
    pub const COLUMNS: [&str; 4] = ["ID", "Użytkownik", "Email", "Rola"];
    pub const NO_ACCESS: &str = "Brak dostępu";
    pub const LOAD_FAILED: &str = "Błąd ładowania danych administratora";
    pub const PENDING_LOAD_FAILED: &str = "Błąd ładowania wniosków";
    pub const FETCH_FAILED: &str = "Błąd pobierania danych";
    pub const NO_RESULTS: &str = "Brak wyników.";
    pub const PAGE_INFO_TEMPLATE: &str = "Strona {} z {}";
    pub const PREVIOUS: &str = "Poprzednia";
    pub const NEXT: &str = "Następna";
    pub const APPROVE: &str = "Zatwierdź";
    pub const REJECT: &str = "Odrzuć";
    pub const APPROVE_CONFIRM: &str = "Zatwierdzić tego użytkownika?";
    pub const REJECT_CONFIRM: &str = "Odrzucić tego użytkownika?";
    pub const APPROVED: &str = "Zatwierdzono.";
    pub const REJECTED: &str = "Odrzucono.";
    pub const OPERATION_FAILED: &str = "Błąd operacji";
}

pub mod registration {
    pub const SUBMITTED: &str = "Wniosek rejestracyjny został przesłany do zatwierdzenia.";
    pub const FAILED: &str = "Błąd rejestracji";
    pub const INVALID_FORM: &str = "Uzupełnij poprawnie wszystkie pola formularza.";
}
