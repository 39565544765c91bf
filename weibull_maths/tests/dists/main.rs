mod weibull;
