mod translate;

pub(crate) use translate::translate_window_event;
